//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::UvCheckConfig;
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::completions::CompletionsCommand;
use super::install::InstallCommand;
use super::sync::SyncCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: UvCheckConfig,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs real processes.
    pub fn new(project_root: PathBuf, config: UvCheckConfig) -> Self {
        Self::with_runner(project_root, config, Box::new(SystemRunner::new()))
    }

    /// Create a dispatcher with a custom process runner.
    pub fn with_runner(
        project_root: PathBuf,
        config: UvCheckConfig,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            project_root,
            config,
            runner,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let spec = self.config.tool.to_spec();
        let runner = self.runner.as_ref();

        match &cli.command {
            Some(Commands::Check(args)) => {
                CheckCommand::new(runner, &self.project_root, spec, args, &self.config.git)
                    .execute(ui)
            }
            Some(Commands::Install(args)) => {
                InstallCommand::new(runner, spec, args.clone()).execute(ui)
            }
            Some(Commands::Sync) => SyncCommand::new(runner, &self.project_root).execute(ui),
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => CheckCommand::new(
                runner,
                &self.project_root,
                spec,
                &CheckArgs::default(),
                &self.config.git,
            )
            .execute(ui),
        }
    }
}
