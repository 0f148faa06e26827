use std::cell::RefCell;
use std::fs;
use std::path::Path;

use postproc::config::RunnerConfig;
use postproc::utils::command::CommandOutput;
use postproc::{CommandRunner, PostProcessor, StepStatus};

/// Scripted runner: records (program, args) pairs and fails the listed programs.
#[derive(Default)]
struct ScriptedRunner {
    calls: RefCell<Vec<(String, Vec<String>)>>,
    failing: Vec<String>,
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String], _current_dir: Option<&Path>) -> CommandOutput {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        let failed = self.failing.iter().any(|p| p == program);
        CommandOutput {
            stdout: String::new(),
            stderr: if failed { "boom".to_string() } else { String::new() },
            success: !failed,
            exit_code: if failed { 1 } else { 0 },
        }
    }
}

#[test]
fn full_pipeline_over_real_library_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("librarian.js"), "// per-library hook").unwrap();
    fs::write(
        dir.path().join(".readme-partials.yaml"),
        "introduction: |\n  Welcome to foo.\nbody: |\n  Usage details.\n",
    )
    .unwrap();

    let processor = PostProcessor::new(RunnerConfig::default(), ScriptedRunner::default());
    let report = processor.run(dir.path()).unwrap();

    let statuses: Vec<StepStatus> = report.steps.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![StepStatus::Ran, StepStatus::Ran, StepStatus::Ran]
    );

    // hook, two generator invocations, fix - in that order
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][0]["step"], "custom_hook");
    assert_eq!(json["steps"][1]["commands"].as_array().unwrap().len(), 2);
}

#[test]
fn fix_failure_still_reports_success_envelope() {
    let dir = tempfile::tempdir().unwrap();

    let runner = ScriptedRunner {
        calls: RefCell::new(Vec::new()),
        failing: vec!["npm".to_string()],
    };
    let processor = PostProcessor::new(RunnerConfig::default(), runner);

    // No hook, no partials: only the fix step runs, and its failure is tolerated
    let report = processor.run(dir.path()).unwrap();
    assert_eq!(report.steps[2].status, StepStatus::Failed);
    assert_eq!(report.steps[2].error.as_deref(), Some("boom"));
}

#[test]
fn partials_filename_override_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("readme-partials.yaml"),
        "introduction: Hi\n",
    )
    .unwrap();

    let config = RunnerConfig {
        partials_file: "readme-partials.yaml".to_string(),
        ..RunnerConfig::default()
    };
    let processor = PostProcessor::new(config, ScriptedRunner::default());
    let report = processor.run(dir.path()).unwrap();

    assert_eq!(report.steps[1].status, StepStatus::Ran);
    assert_eq!(report.steps[1].commands.len(), 1);
}
