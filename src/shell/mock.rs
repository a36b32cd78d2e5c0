//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] by replaying a queue of
//! canned outcomes in order and recording every invocation for later
//! assertion. Once the queue is exhausted every call behaves as if the
//! program was not found.
//!
//! # Example
//!
//! ```
//! use uv_check::shell::{CommandRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new()
//!     .then_ok("uv 0.5.1\n")
//!     .then_exit(1);
//!
//! assert!(runner.run("uv", &["--version"], None).unwrap().success);
//! assert!(!runner.run("uv", &["--version"], None).unwrap().success);
//! assert!(runner.run("uv", &["--version"], None).is_err());
//! assert_eq!(runner.calls().len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, UvCheckError};

use super::command::{render_command, CommandResult, CommandRunner};

/// A canned outcome for one invocation.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Process ran and exited with this code and stdout.
    Exit { code: i32, stdout: String },
    /// Process could not be spawned.
    NotFound,
}

/// Mock command runner that replays scripted outcomes.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: RefCell<VecDeque<ScriptedOutcome>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful exit with the given stdout.
    pub fn then_ok(self, stdout: &str) -> Self {
        self.push(ScriptedOutcome::Exit {
            code: 0,
            stdout: stdout.to_string(),
        })
    }

    /// Queue a non-zero exit with empty output.
    pub fn then_exit(self, code: i32) -> Self {
        self.push(ScriptedOutcome::Exit {
            code,
            stdout: String::new(),
        })
    }

    /// Queue a spawn failure.
    pub fn then_not_found(self) -> Self {
        self.push(ScriptedOutcome::NotFound)
    }

    fn push(self, outcome: ScriptedOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of scripted outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.borrow().len()
    }

    fn replay(&self, display: String) -> Result<CommandResult> {
        self.calls.borrow_mut().push(display.clone());
        let outcome = self
            .outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(ScriptedOutcome::NotFound);

        match outcome {
            ScriptedOutcome::Exit { code: 0, stdout } => {
                Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
            }
            ScriptedOutcome::Exit { code, stdout } => Ok(CommandResult::failure(
                Some(code),
                stdout,
                String::new(),
                Duration::ZERO,
            )),
            ScriptedOutcome::NotFound => Err(UvCheckError::CommandFailed {
                command: display,
                code: None,
            }),
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<CommandResult> {
        self.replay(render_command(program, args))
    }

    fn run_shell(&self, command: &str) -> Result<CommandResult> {
        self.replay(command.to_string())
    }
}
