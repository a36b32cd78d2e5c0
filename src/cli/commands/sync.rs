//! Sync command implementation.
//!
//! The `uv_check sync` command fails with exit code 1 when the local branch
//! does not match `origin/<branch>`. A check that cannot complete (no
//! repository, offline, no remote branch) passes.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::{check_up_to_date, SyncStatus, REMOTE};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The sync command implementation.
pub struct SyncCommand<'a> {
    runner: &'a dyn CommandRunner,
    project_root: PathBuf,
}

impl<'a> SyncCommand<'a> {
    /// Create a new sync command.
    pub fn new(runner: &'a dyn CommandRunner, project_root: &Path) -> Self {
        Self {
            runner,
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for SyncCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut spinner = ui.start_spinner(&format!("Comparing with {}...", REMOTE));
        let status = check_up_to_date(self.runner, &self.project_root);
        display::finish_sync_spinner(spinner.as_mut(), &status);

        match &status {
            SyncStatus::OutOfDate { branch, .. } => {
                display::show_out_of_date(ui, branch);
                Ok(CommandResult::failure(1))
            }
            SyncStatus::UpToDate { .. } | SyncStatus::Skipped { .. } => {
                Ok(CommandResult::success())
            }
        }
    }
}
