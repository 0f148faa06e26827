//! Post-processing pipeline for a single library directory.
//!
//! Three fixed steps, always in this order:
//! 1. Custom hook - run the library's hook script if present
//! 2. README regeneration - invoke the generator once per declared partial
//! 3. Fix - run the fix/format command, tolerating failure
//!
//! Hook and README failures abort the run. The fix step is expected to be
//! re-run by a higher-level process, so its failure is logged and recorded
//! in the report without failing the run.

use std::path::Path;

use serde::Serialize;

use crate::config::RunnerConfig;
use crate::error::{Error, Result};
use crate::executor::CommandRunner;
use crate::files::probe_optional;
use crate::log_status;
use crate::partials;
use crate::utils::command::{error_text, CommandOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    CustomHook,
    Readme,
    Fix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Ran,
    Skipped,
    Failed,
}

/// Result of one pipeline step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step: StepKind,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    fn skipped(step: StepKind) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            commands: Vec::new(),
            error: None,
        }
    }

    fn ran(step: StepKind, commands: Vec<CommandOutput>) -> Self {
        Self {
            step,
            status: StepStatus::Ran,
            commands,
            error: None,
        }
    }
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub library_dir: String,
    pub steps: Vec<StepReport>,
}

pub struct PostProcessor<R: CommandRunner> {
    config: RunnerConfig,
    runner: R,
}

impl<R: CommandRunner> PostProcessor<R> {
    pub fn new(config: RunnerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Run all three steps against `library_dir`.
    ///
    /// Returns `Err` only for fatal conditions: a failed hook, a failed
    /// README-generator invocation, an unreadable or invalid partials file,
    /// or a filesystem error other than not-found while probing.
    pub fn run(&self, library_dir: &Path) -> Result<RunReport> {
        let mut steps = Vec::with_capacity(3);

        steps.push(self.run_custom_hook(library_dir)?);
        steps.push(self.regenerate_readme(library_dir)?);
        steps.push(self.run_fix(library_dir)?);

        Ok(RunReport {
            library_dir: library_dir.display().to_string(),
            steps,
        })
    }

    fn run_custom_hook(&self, library_dir: &Path) -> Result<StepReport> {
        let script = library_dir.join(&self.config.hook_script);

        let Some(script) = probe_optional(&script)? else {
            return Ok(StepReport::skipped(StepKind::CustomHook));
        };

        log_status!("hook", "Running {}", script.display());
        let output = self.runner.run(
            &self.config.hook_program,
            &[script.display().to_string()],
            Some(library_dir),
        );

        if !output.success {
            return Err(Error::Hook(format!(
                "{}: {}",
                script.display(),
                error_text(&output)
            )));
        }

        log_status!("hook", "Finished {}", script.display());
        Ok(StepReport::ran(StepKind::CustomHook, vec![output]))
    }

    fn regenerate_readme(&self, library_dir: &Path) -> Result<StepReport> {
        let path = library_dir.join(&self.config.partials_file);

        // Loaded at most once per run; each present key gets its own invocation.
        let Some(partials) = partials::load(&path)? else {
            return Ok(StepReport::skipped(StepKind::Readme));
        };

        log_status!(
            "readme",
            "Regenerating README in {} from {}",
            library_dir.display(),
            self.config.partials_file
        );

        let mut commands = Vec::new();
        for (marker, text) in partials.sections() {
            let args = vec![
                format!("--library-path={}", library_dir.display()),
                format!("--string-to-replace={}", marker),
                format!("--replacement-string={}", text),
            ];
            let output = self
                .runner
                .run(&self.config.readme_generator, &args, Some(library_dir));

            if !output.success {
                return Err(Error::Readme(format!(
                    "{} for {}: {}",
                    self.config.readme_generator,
                    marker,
                    error_text(&output)
                )));
            }
            commands.push(output);
        }

        log_status!("readme", "Finished regenerating README");
        Ok(StepReport::ran(StepKind::Readme, commands))
    }

    fn run_fix(&self, library_dir: &Path) -> Result<StepReport> {
        let (program, args) = self.config.fix_invocation()?;

        log_status!("fix", "Running {} in {}", self.config.fix_command, library_dir.display());
        let output = self.runner.run(&program, &args, Some(library_dir));

        if !output.success {
            // Tolerated: formatting failures are handled by a separate
            // higher-level process.
            let error = error_text(&output).to_string();
            log_status!("fix", "Fix command failed (tolerated): {}", error);
            return Ok(StepReport {
                step: StepKind::Fix,
                status: StepStatus::Failed,
                commands: vec![output],
                error: Some(error),
            });
        }

        log_status!("fix", "Finished {}", self.config.fix_command);
        Ok(StepReport::ran(StepKind::Fix, vec![output]))
    }
}
