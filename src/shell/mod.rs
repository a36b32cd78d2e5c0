//! Process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{render_command, CommandResult, CommandRunner, SystemRunner};
pub use mock::{ScriptedOutcome, ScriptedRunner};
pub use platform::{is_ci, shell_invocation};
