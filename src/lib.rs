//! uv-check - make sure the uv package manager is installed and the git
//! checkout is current.
//!
//! Every operation launches an external process through a
//! [`CommandRunner`](shell::CommandRunner) and inspects its exit code or
//! output.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional layered YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`git`] - Remote synchronization check
//! - [`report`] - Status record and printed report
//! - [`requirements`] - Tool presence check and installer
//! - [`shell`] - Process execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use uv_check::requirements::{dry_run_install, ToolSpec};
//! use uv_check::shell::ScriptedRunner;
//!
//! let runner = ScriptedRunner::new().then_not_found();
//! let plan = dry_run_install(&runner, &ToolSpec::uv());
//!
//! assert!(plan.needs_install);
//! assert!(plan.message.starts_with("uv is not installed"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, UvCheckError};
