//! Status record and the printed installation report.
//!
//! A [`StatusReport`] is collected with a single presence check and then
//! rendered either as text through a [`UserInterface`] or as JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::git::SyncStatus;
use crate::requirements::{check_tool, plan_for, ToolSpec, ToolStatus};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Everything the `check` command knows about the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Binary name.
    pub tool: String,
    /// Whether the version command succeeded.
    pub installed: bool,
    /// Parsed version, when installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Whether the installer would run.
    pub needs_install: bool,
    /// Dry-run message.
    pub message: String,
    /// The installer command line.
    pub install_command: String,
    /// Binary present in an installer directory but not on PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_at: Option<PathBuf>,
    /// Remote sync status, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<SyncStatus>,
}

impl StatusReport {
    /// Check the tool once and build the report from that result.
    pub fn collect(runner: &dyn CommandRunner, spec: &ToolSpec) -> Self {
        Self::from_status(spec, check_tool(runner, spec))
    }

    /// Build the report for an already-known tool status.
    pub fn from_status(spec: &ToolSpec, status: ToolStatus) -> Self {
        let plan = plan_for(spec, status.is_installed());
        Self {
            tool: spec.name.clone(),
            installed: status.is_installed(),
            version: status.version().map(str::to_string),
            needs_install: plan.needs_install,
            message: plan.message,
            install_command: spec.install_command.clone(),
            found_at: status.found_at().cloned(),
            git: None,
        }
    }

    /// Attach a sync status.
    pub fn with_git(mut self, status: SyncStatus) -> Self {
        self.git = Some(status);
        self
    }

    /// `Installed` or `Not Installed`.
    pub fn status_label(&self) -> &'static str {
        if self.installed {
            "Installed"
        } else {
            "Not Installed"
        }
    }

    /// `Install` or `None`.
    pub fn action_label(&self) -> &'static str {
        if self.needs_install {
            "Install"
        } else {
            "None"
        }
    }
}

/// Print the numbered report.
pub fn print_report(ui: &mut dyn UserInterface, report: &StatusReport) {
    let tool = &report.tool;

    ui.show_header(&format!("=== {} Installation Checker ===", tool.to_uppercase()));

    ui.message(&format!("1. Checking if {} is installed...", tool));
    if report.installed {
        match &report.version {
            Some(version) => {
                ui.success(&format!("   {} {} is installed and available", tool, version))
            }
            None => ui.success(&format!("   {} is installed and available", tool)),
        }
    } else {
        ui.message(&format!("   {} is not installed", tool));
        if let Some(path) = &report.found_at {
            ui.show_hint(&format!(
                "Found {} but its directory is not on PATH; restart your shell or add it to PATH",
                path.display()
            ));
        }
    }

    ui.message("");
    ui.message("2. Dry run analysis...");
    ui.message(&format!("   {}", report.message));

    ui.message("");
    ui.message("3. Installation status...");
    if report.needs_install {
        ui.message(&format!("   Would install {} using the official installer", tool));
        ui.message(&format!("   Command: {}", report.install_command));
    } else {
        ui.message(&format!("   No installation needed - {} is ready to use", tool));
    }

    ui.message("");
    ui.message("=== Summary ===");
    ui.message(&format!(
        "{} Status: {}",
        tool.to_uppercase(),
        report.status_label()
    ));
    ui.message(&format!("Action Required: {}", report.action_label()));
}
