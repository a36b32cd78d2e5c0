//! Configuration schema.
//!
//! Every field has a default, so an absent or empty config file yields the
//! stock uv setup.

use serde::{Deserialize, Serialize};

use crate::requirements::{ToolSpec, UV_INSTALL_COMMAND};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UvCheckConfig {
    /// The tool to check and install.
    pub tool: ToolConfig,

    /// Git synchronization check.
    pub git: GitConfig,

    /// Output settings.
    pub settings: Settings,
}

/// Which binary to check and how to install it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Binary name looked up on PATH
    pub name: String,

    /// Arguments that print the version and exit 0
    pub version_args: Vec<String>,

    /// Shell command line that installs the tool
    pub install_command: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: "uv".to_string(),
            version_args: vec!["--version".to_string()],
            install_command: UV_INSTALL_COMMAND.to_string(),
        }
    }
}

impl ToolConfig {
    /// Convert into a [`ToolSpec`] for the checker and installer.
    pub fn to_spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name.clone(),
            version_args: self.version_args.clone(),
            install_command: self.install_command.clone(),
        }
    }
}

/// Git synchronization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Include the sync status in `check` output without `--git`
    pub check: bool,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode when no CLI flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
