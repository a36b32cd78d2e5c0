//! Remote synchronization check.
//!
//! The check fetches from `origin` and compares the local `HEAD` commit with
//! `origin/<branch>`. It is advisory: whenever git cannot answer (no
//! repository, offline, no upstream branch) the checkout is treated as up to
//! date so the caller is never blocked by the check itself.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::shell::CommandRunner;

/// The remote every comparison is made against.
pub const REMOTE: &str = "origin";

/// The step at which a sync check gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStep {
    /// `git rev-parse --git-dir` failed.
    NotARepository,
    /// `git fetch` failed.
    Fetch,
    /// `git rev-parse --abbrev-ref HEAD` failed.
    Branch,
    /// HEAD does not point at a branch.
    DetachedHead,
    /// `git rev-parse HEAD` failed.
    LocalCommit,
    /// `git rev-parse origin/<branch>` failed.
    RemoteCommit,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyncStep::NotARepository => "not a git repository",
            SyncStep::Fetch => "could not fetch from origin",
            SyncStep::Branch => "could not determine the current branch",
            SyncStep::DetachedHead => "HEAD is detached",
            SyncStep::LocalCommit => "could not read the local commit",
            SyncStep::RemoteCommit => "no matching branch on origin",
        };
        f.write_str(text)
    }
}

/// Result of comparing the local checkout with its remote branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncStatus {
    /// Local HEAD matches `origin/<branch>`.
    UpToDate { branch: String, commit: String },
    /// Local HEAD differs from `origin/<branch>` (behind, ahead, or diverged).
    OutOfDate {
        branch: String,
        local: String,
        remote: String,
    },
    /// The check could not complete; treated as up to date.
    Skipped { step: SyncStep },
}

impl SyncStatus {
    /// Whether the caller may proceed. Only [`SyncStatus::OutOfDate`] is false.
    pub fn is_up_to_date(&self) -> bool {
        !matches!(self, SyncStatus::OutOfDate { .. })
    }

    /// The branch that was compared, when known.
    pub fn branch(&self) -> Option<&str> {
        match self {
            SyncStatus::UpToDate { branch, .. } | SyncStatus::OutOfDate { branch, .. } => {
                Some(branch)
            }
            SyncStatus::Skipped { .. } => None,
        }
    }
}

/// The command a user should run to catch up with the remote.
pub fn pull_command(branch: &str) -> String {
    format!("git pull {} {}", REMOTE, branch)
}

/// Check whether the checkout at `dir` matches its remote branch.
pub fn check_up_to_date(runner: &dyn CommandRunner, dir: &Path) -> SyncStatus {
    let git = |args: &[&str]| -> Option<String> {
        match runner.run("git", args, Some(dir)) {
            Ok(result) if result.success => Some(result.stdout_trimmed().to_string()),
            Ok(result) => {
                tracing::debug!(
                    "git {} exited with {:?}: {}",
                    args.join(" "),
                    result.exit_code,
                    result.stderr.trim()
                );
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    };

    let skipped = |step: SyncStep| {
        tracing::debug!("Skipping sync check: {}", step);
        SyncStatus::Skipped { step }
    };

    if git(&["rev-parse", "--git-dir"]).is_none() {
        return skipped(SyncStep::NotARepository);
    }

    if git(&["fetch", REMOTE]).is_none() {
        return skipped(SyncStep::Fetch);
    }

    let Some(branch) = git(&["rev-parse", "--abbrev-ref", "HEAD"]) else {
        return skipped(SyncStep::Branch);
    };
    if branch == "HEAD" || branch.is_empty() {
        return skipped(SyncStep::DetachedHead);
    }

    let Some(local) = git(&["rev-parse", "HEAD"]) else {
        return skipped(SyncStep::LocalCommit);
    };

    let remote_ref = format!("{}/{}", REMOTE, branch);
    let Some(remote) = git(&["rev-parse", &remote_ref]) else {
        return skipped(SyncStep::RemoteCommit);
    };

    if local == remote {
        SyncStatus::UpToDate {
            branch,
            commit: local,
        }
    } else {
        tracing::debug!("{} is at {} but {} is at {}", branch, local, remote_ref, remote);
        SyncStatus::OutOfDate {
            branch,
            local,
            remote,
        }
    }
}
