//! Install command implementation.
//!
//! The `uv_check install` command runs the tool's official installer when
//! the tool is missing. `--dry-run` only prints the plan.

use std::path::Path;

use crate::cli::args::InstallArgs;
use crate::error::{Result, UvCheckError};
use crate::requirements::{check_tool, dry_run_install, run_installer, ToolSpec, ToolStatus};
use crate::shell::CommandRunner;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    runner: &'a dyn CommandRunner,
    spec: ToolSpec,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(runner: &'a dyn CommandRunner, spec: ToolSpec, args: InstallArgs) -> Self {
        Self { runner, spec, args }
    }

    /// `--yes` answers the question up front. Otherwise the UI decides,
    /// which outside a terminal means `UV_CHECK_PROMPT_INSTALL` or yes.
    fn confirmed(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.yes {
            return Ok(true);
        }

        let question = format!(
            "Install {} with `{}`?",
            self.spec.name, self.spec.install_command
        );
        ui.prompt(&Prompt::confirm("install", &question, true))
    }

    fn failure(&self, ui: &mut dyn UserInterface, found_at: Option<&Path>) -> UvCheckError {
        let message = match found_at {
            Some(path) => {
                ui.show_hint("Restart your shell or add the install directory to PATH");
                format!("installed to {} but it is not on PATH", path.display())
            }
            None => format!("`{}` did not succeed", self.spec.install_command),
        };

        UvCheckError::InstallFailed {
            tool: self.spec.name.clone(),
            message,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.dry_run {
            let plan = dry_run_install(self.runner, &self.spec);
            ui.message(&plan.message);
            return Ok(CommandResult::success());
        }

        if let ToolStatus::Installed { version } = check_tool(self.runner, &self.spec) {
            let label = match version {
                Some(v) => format!("{} {}", self.spec.name, v),
                None => self.spec.name.clone(),
            };
            ui.success(&format!("{} is already installed", label));
            return Ok(CommandResult::success());
        }

        if !self.confirmed(ui)? {
            ui.warning("Installation cancelled");
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Running: {}", self.spec.install_command));
        match run_installer(self.runner, &self.spec) {
            ToolStatus::Installed { .. } => {
                ui.success(&format!("{} installed successfully", self.spec.name));
                Ok(CommandResult::success())
            }
            ToolStatus::Missing { found_at } => Err(self.failure(ui, found_at.as_deref())),
        }
    }
}
