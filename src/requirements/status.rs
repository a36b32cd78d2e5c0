//! Tool status types.
//!
//! A presence check produces a [`ToolStatus`]; a dry run produces an
//! [`InstallPlan`].

use std::path::PathBuf;

use serde::Serialize;

/// The result of checking whether a tool is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// `<tool> --version` exited 0.
    Installed {
        /// Version number parsed from the version output, if recognizable.
        version: Option<String>,
    },

    /// The tool could not be run, or its version command failed.
    Missing {
        /// Binary found in an installer directory that is not on PATH.
        found_at: Option<PathBuf>,
    },
}

impl ToolStatus {
    /// Whether the tool is installed and runnable.
    pub fn is_installed(&self) -> bool {
        matches!(self, ToolStatus::Installed { .. })
    }

    /// The detected version, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            ToolStatus::Installed { version } => version.as_deref(),
            ToolStatus::Missing { .. } => None,
        }
    }

    /// Path of a binary that exists but is not on PATH.
    pub fn found_at(&self) -> Option<&PathBuf> {
        match self {
            ToolStatus::Missing { found_at } => found_at.as_ref(),
            ToolStatus::Installed { .. } => None,
        }
    }
}

/// Outcome of a dry-run install: what would happen, without doing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    /// Whether the installer would be run.
    pub needs_install: bool,
    /// Human-readable explanation.
    pub message: String,
}
