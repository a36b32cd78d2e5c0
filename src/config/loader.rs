//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::UvCheckConfig;
use crate::config::validator::validate;
use crate::error::{Result, UvCheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding configuration, both per project and per user.
pub const CONFIG_DIR: &str = ".uv_check";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.uv_check/config.yml`)
/// 2. Project config (`.uv_check/config.yml`)
/// 3. Local overrides (`.uv_check/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.uv_check/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .uv_check/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .uv_check/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        let project_dir = project_root.join(CONFIG_DIR);
        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_dir.join("config.yml")),
            project_local: existing(project_dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            UvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            UvCheckError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| UvCheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file into a typed, validated config.
///
/// An empty file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<UvCheckConfig> {
    let value = load_config_value(path)?;
    from_merged(merge_configs(&[value]), path)
}

/// Load and merge every discovered config file for a project.
///
/// No config files at all is not an error: the defaults apply.
pub fn load_merged_config(project_root: &Path) -> Result<UvCheckConfig> {
    load_from_paths(&ConfigPaths::discover(project_root), project_root)
}

/// Load and merge the given discovered paths.
pub fn load_from_paths(paths: &ConfigPaths, project_root: &Path) -> Result<UvCheckConfig> {
    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        let value = load_config_value(path)?;
        decode_layer(&value, path)?;
        values.push(value);
    }

    from_merged(
        merge_configs(&values),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<UvCheckConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

/// Type-check one layer on its own so a bad value is reported against the
/// file it came from.
fn decode_layer(value: &serde_yaml::Value, path: &Path) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    serde_yaml::from_value::<UvCheckConfig>(value.clone())
        .map(|_| ())
        .map_err(|e| UvCheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn from_merged(merged: serde_yaml::Value, report_path: &Path) -> Result<UvCheckConfig> {
    let config: UvCheckConfig =
        serde_yaml::from_value(merged).map_err(|e| UvCheckError::ConfigParseError {
            path: report_path.to_path_buf(),
            message: e.to_string(),
        })?;
    validate(&config)?;
    Ok(config)
}
