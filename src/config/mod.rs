//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use uv_check::config::load_config_file;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "tool:\n  install_command: brew install uv").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.tool.name, "uv");
//! assert_eq!(config.tool.install_command, "brew install uv");
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is optional. When present it is merged in this order:
//! 1. User global config (`~/.uv_check/config.yml`)
//! 2. Project config (`.uv_check/config.yml`)
//! 3. Local overrides (`.uv_check/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_from_paths, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{GitConfig, OutputMode, Settings, ToolConfig, UvCheckConfig};
pub use validator::{validate, validate_config, ValidationError};
