//! Process execution.
//!
//! Every external process uv-check launches goes through a
//! [`CommandRunner`]. Production code uses [`SystemRunner`]; tests swap in
//! [`ScriptedRunner`](super::ScriptedRunner).

use crate::error::{Result, UvCheckError};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when not captured).
    pub stdout: String,

    /// Standard error (empty when not captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Launches external processes.
///
/// A spawn failure (program not found, permission denied) is an `Err`;
/// a process that ran and exited non-zero is an `Ok` with `success == false`.
pub trait CommandRunner {
    /// Run a program directly with captured stdout and stderr.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult>;

    /// Run a command line through the platform shell with inherited stdio.
    fn run_shell(&self, command: &str) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult> {
        let start = Instant::now();
        let shown = render_command(program, args);

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());

        let output = cmd.output().map_err(|e| {
            tracing::debug!("Failed to spawn `{}`: {}", shown, e);
            UvCheckError::CommandFailed {
                command: shown.clone(),
                code: None,
            }
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "`{}` exited with {:?} in {:?}",
            shown,
            output.status.code(),
            duration
        );

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }

    fn run_shell(&self, command: &str) -> Result<CommandResult> {
        let start = Instant::now();
        let (shell, flag) = super::platform::shell_invocation();

        let status = Command::new(shell)
            .arg(flag)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::debug!("Failed to spawn {} for `{}`: {}", shell, command, e);
                UvCheckError::CommandFailed {
                    command: command.to_string(),
                    code: None,
                }
            })?;

        let duration = start.elapsed();
        tracing::debug!(
            "`{} {} {}` exited with {:?} in {:?}",
            shell,
            flag,
            command,
            status.code(),
            duration
        );

        if status.success() {
            Ok(CommandResult::success(String::new(), String::new(), duration))
        } else {
            Ok(CommandResult::failure(
                status.code(),
                String::new(),
                String::new(),
                duration,
            ))
        }
    }
}

/// Render a program and its arguments as a single display string.
pub fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
