//! Shared display helpers for sync status formatting.
//!
//! Used by `check --git` and `sync` so both render [`SyncStatus`] the same way.

use crate::git::{pull_command, SyncStatus, REMOTE};
use crate::ui::{SpinnerHandle, UserInterface};

/// Abbreviate a commit hash for display.
pub fn short_commit(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}

/// One-line description of a sync status.
pub fn sync_summary(status: &SyncStatus) -> String {
    match status {
        SyncStatus::UpToDate { branch, commit } => format!(
            "{} is up to date with {}/{} ({})",
            branch,
            REMOTE,
            branch,
            short_commit(commit)
        ),
        SyncStatus::OutOfDate {
            branch,
            local,
            remote,
        } => format!(
            "{} ({}) differs from {}/{} ({})",
            branch,
            short_commit(local),
            REMOTE,
            branch,
            short_commit(remote)
        ),
        SyncStatus::Skipped { step } => format!("Sync check skipped: {}", step),
    }
}

/// Tell the user the checkout is stale and how to fix it.
pub fn show_out_of_date(ui: &mut dyn UserInterface, branch: &str) {
    ui.error("Error: Current git representation is not up to date.");
    ui.message("Please update your repository with:");
    ui.message(&format!("  {}", pull_command(branch)));
}

/// Print a sync status without a spinner.
pub fn show_sync_status(ui: &mut dyn UserInterface, status: &SyncStatus) {
    match status {
        SyncStatus::UpToDate { .. } => ui.success(&sync_summary(status)),
        SyncStatus::Skipped { .. } => ui.message(&sync_summary(status)),
        SyncStatus::OutOfDate { branch, .. } => show_out_of_date(ui, branch),
    }
}

/// Finish a spinner with the matching outcome for a sync status.
pub fn finish_sync_spinner(spinner: &mut dyn SpinnerHandle, status: &SyncStatus) {
    let summary = sync_summary(status);
    match status {
        SyncStatus::UpToDate { .. } => spinner.finish_success(&summary),
        SyncStatus::OutOfDate { .. } => spinner.finish_error(&summary),
        SyncStatus::Skipped { .. } => spinner.finish_skipped(&summary),
    }
}
