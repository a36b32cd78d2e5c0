//! Check command implementation.
//!
//! The `uv_check check` command prints the installation report. It only
//! reports, so it always exits 0.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::GitConfig;
use crate::error::{Result, UvCheckError};
use crate::git::check_up_to_date;
use crate::report::{print_report, StatusReport};
use crate::requirements::ToolSpec;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The check command implementation.
pub struct CheckCommand<'a> {
    runner: &'a dyn CommandRunner,
    project_root: PathBuf,
    spec: ToolSpec,
    json: bool,
    git: bool,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    ///
    /// The sync check runs when `--git` is passed or `git.check` is set.
    pub fn new(
        runner: &'a dyn CommandRunner,
        project_root: &Path,
        spec: ToolSpec,
        args: &CheckArgs,
        git_config: &GitConfig,
    ) -> Self {
        Self {
            runner,
            project_root: project_root.to_path_buf(),
            spec,
            json: args.json,
            git: args.git || git_config.check,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut report = StatusReport::collect(self.runner, &self.spec);

        if self.git {
            report = report.with_git(check_up_to_date(self.runner, &self.project_root));
        }

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| UvCheckError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        print_report(ui, &report);

        if let Some(status) = &report.git {
            ui.message("");
            ui.message("=== Git ===");
            display::show_sync_status(ui, status);
        }

        Ok(CommandResult::success())
    }
}
