//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

/// Captured output from command execution.
/// Reusable primitive for any code that runs external processes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Run a program with args, capturing stdout and stderr.
///
/// No shell is involved; `program` is spawned directly. A spawn error
/// (e.g. binary not on PATH) is reported as a failed `CommandOutput`
/// with exit code -1 rather than a process-level error.
pub fn run_captured(program: &str, args: &[String], current_dir: Option<&Path>) -> CommandOutput {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    match cmd.output() {
        Ok(out) => CommandOutput {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            success: out.status.success(),
            exit_code: out.status.code().unwrap_or(-1),
        },
        Err(e) => CommandOutput {
            stdout: String::new(),
            stderr: format!("Command error: {}", e),
            success: false,
            exit_code: -1,
        },
    }
}

/// Extract error text from captured output.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &CommandOutput) -> &str {
    if !output.stderr.trim().is_empty() {
        output.stderr.trim()
    } else {
        output.stdout.trim()
    }
}

/// Split a configured command string into program + args.
///
/// Honors single and double quotes so values like `npm run "fix all"`
/// split correctly. This is tokenization only; no shell evaluation,
/// no variable expansion.
pub fn split_command(command: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for ch in command.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        parts.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if in_token {
        parts.push(current);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captured_succeeds_with_valid_command() {
        let output = run_captured("echo", &["hello".to_string()], None);
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn run_captured_reports_nonzero_exit() {
        let output = run_captured("false", &[], None);
        assert!(!output.success);
        assert_ne!(output.exit_code, 0);
    }

    #[test]
    fn run_captured_missing_binary_becomes_failed_output() {
        let output = run_captured("nonexistent_command_xyz", &[], None);
        assert!(!output.success);
        assert_eq!(output.exit_code, -1);
        assert!(output.stderr.contains("Command error"));
    }

    #[test]
    fn run_captured_respects_current_dir() {
        let output = run_captured("pwd", &[], Some(std::path::Path::new("/tmp")));
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "/tmp");
    }

    #[test]
    fn error_text_prefers_stderr() {
        let output = CommandOutput {
            stdout: "stdout content".to_string(),
            stderr: "stderr content".to_string(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(error_text(&output), "stderr content");
    }

    #[test]
    fn error_text_falls_back_to_stdout() {
        let output = CommandOutput {
            stdout: "stdout content".to_string(),
            stderr: String::new(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(error_text(&output), "stdout content");
    }

    #[test]
    fn split_command_simple() {
        assert_eq!(split_command("npm run fix"), vec!["npm", "run", "fix"]);
    }

    #[test]
    fn split_command_quoted() {
        assert_eq!(
            split_command("npm run \"fix all\""),
            vec!["npm", "run", "fix all"]
        );
        assert_eq!(split_command("gts 'fix'"), vec!["gts", "fix"]);
    }

    #[test]
    fn split_command_empty() {
        assert!(split_command("").is_empty());
        assert!(split_command("   ").is_empty());
    }

    #[test]
    fn split_command_collapses_extra_whitespace() {
        assert_eq!(split_command("  gts   fix "), vec!["gts", "fix"]);
    }
}
