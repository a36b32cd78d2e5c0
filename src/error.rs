//! Error types for uv-check operations.
//!
//! This module defines [`UvCheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probing a tool or a git checkout never fails: process errors are folded
//!   into status values ([`ToolStatus`](crate::requirements::ToolStatus),
//!   [`SyncStatus`](crate::git::SyncStatus))
//! - Configuration, prompt, and install errors propagate to `main` with `?`
//! - Use `anyhow::Error` (via `UvCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for uv-check operations.
#[derive(Debug, Error)]
pub enum UvCheckError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A process could not be spawned or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The installer ran but the tool is still unavailable.
    #[error("Failed to install '{tool}': {message}")]
    InstallFailed { tool: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for uv-check operations.
pub type Result<T> = std::result::Result<T, UvCheckError>;
