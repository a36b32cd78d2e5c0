//! Tool presence checks and installation.
//!
//! # Modules
//!
//! - [`checker`] - Version-command presence check
//! - [`installer`] - Dry-run planning and installer execution
//! - [`probe`] - Lookup of installed binaries outside PATH
//! - [`status`] - Status and plan types

pub mod checker;
pub mod installer;
pub mod probe;
pub mod status;

pub use checker::{check_tool, is_installed, parse_version, ToolSpec, UV_INSTALL_COMMAND};
pub use installer::{dry_run_install, install, plan_for, run_installer};
pub use status::{InstallPlan, ToolStatus};
