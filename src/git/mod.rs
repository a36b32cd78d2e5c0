//! Git checkout inspection.
//!
//! - [`sync`] - Compare the local branch with its `origin` counterpart

pub mod sync;

pub use sync::{check_up_to_date, pull_command, SyncStatus, SyncStep, REMOTE};
