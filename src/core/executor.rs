// Command-runner seam - production code spawns real processes, tests substitute a fake

use std::path::Path;

use crate::utils::command::{run_captured, CommandOutput};

/// Abstraction over external-process invocation.
///
/// Every step in the post-processing pipeline shells out through this trait,
/// so tests can record invocations and script outcomes without touching
/// real external binaries.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], current_dir: Option<&Path>) -> CommandOutput;
}

/// The real runner: spawns the program directly and captures output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], current_dir: Option<&Path>) -> CommandOutput {
        run_captured(program, args, current_dir)
    }
}
