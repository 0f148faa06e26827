//! Runner configuration.
//!
//! The hook script name and README markers are stable, but the partials
//! filename and the fix command have both drifted across deployments
//! (`readme-partials.yaml` vs `.readme-partials.yaml`, `gts fix` vs
//! `npm run fix`), so both are configurable rather than hard-coded.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::command::split_command;

pub mod defaults {
    pub const HOOK_SCRIPT: &str = "librarian.js";
    pub const HOOK_PROGRAM: &str = "node";
    pub const PARTIALS_FILE: &str = ".readme-partials.yaml";
    pub const README_GENERATOR: &str = "generate-readme";
    pub const FIX_COMMAND: &str = "npm run fix";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerConfig {
    /// Optional per-library hook script, resolved inside the library directory.
    pub hook_script: String,
    /// Interpreter used to execute the hook script.
    pub hook_program: String,
    /// Optional partials file, resolved inside the library directory.
    pub partials_file: String,
    /// External README-generation tool.
    pub readme_generator: String,
    /// Fix/format command run in the library directory, as a command string.
    pub fix_command: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            hook_script: defaults::HOOK_SCRIPT.to_string(),
            hook_program: defaults::HOOK_PROGRAM.to_string(),
            partials_file: defaults::PARTIALS_FILE.to_string(),
            readme_generator: defaults::README_GENERATOR.to_string(),
            fix_command: defaults::FIX_COMMAND.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Split the configured fix command into program + args.
    pub fn fix_invocation(&self) -> Result<(String, Vec<String>)> {
        let mut parts = split_command(&self.fix_command);
        if parts.is_empty() {
            return Err(Error::Config("Fix command is empty".to_string()));
        }
        let program = parts.remove(0);
        Ok((program, parts))
    }
}
