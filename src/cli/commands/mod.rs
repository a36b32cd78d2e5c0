//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the
//! [`CommandRunner`](crate::shell::CommandRunner) it launches processes
//! through, so tests can script process outcomes.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod install;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
