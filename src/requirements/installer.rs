//! Tool installation.
//!
//! Installation runs exactly one documented installer command line and then
//! re-checks presence. There are no retries and no alternative installers.

use crate::requirements::checker::{check_tool, is_installed, ToolSpec};
use crate::requirements::status::{InstallPlan, ToolStatus};
use crate::shell::CommandRunner;

/// Describe what [`install`] would do without running the installer.
pub fn dry_run_install(runner: &dyn CommandRunner, spec: &ToolSpec) -> InstallPlan {
    plan_for(spec, is_installed(runner, spec))
}

/// Build the plan for a known installed state.
pub fn plan_for(spec: &ToolSpec, installed: bool) -> InstallPlan {
    if installed {
        InstallPlan {
            needs_install: false,
            message: format!("{} is already installed", spec.name),
        }
    } else {
        InstallPlan {
            needs_install: true,
            message: format!(
                "{} is not installed and would be installed using: {}",
                spec.name, spec.install_command
            ),
        }
    }
}

/// Install the tool if it is not already installed.
///
/// Returns `true` when the tool is available afterwards. An installer that
/// exits 0 but leaves the tool unrunnable counts as a failure.
pub fn install(runner: &dyn CommandRunner, spec: &ToolSpec) -> bool {
    if is_installed(runner, spec) {
        tracing::debug!("{} already installed; skipping installer", spec.name);
        return true;
    }

    run_installer(runner, spec).is_installed()
}

/// Run the installer unconditionally and report the tool's status afterwards.
///
/// For callers that already know the tool is missing. A failed installer
/// yields `Missing` without probing again.
pub fn run_installer(runner: &dyn CommandRunner, spec: &ToolSpec) -> ToolStatus {
    tracing::info!("Installing {} with `{}`", spec.name, spec.install_command);
    match runner.run_shell(&spec.install_command) {
        Ok(result) if result.success => {
            let status = check_tool(runner, spec);
            if !status.is_installed() {
                tracing::warn!(
                    "Installer for {} succeeded but `{}` still fails",
                    spec.name,
                    spec.version_command()
                );
            }
            status
        }
        Ok(result) => {
            tracing::warn!(
                "Installer for {} exited with {:?}",
                spec.name,
                result.exit_code
            );
            ToolStatus::Missing { found_at: None }
        }
        Err(e) => {
            tracing::warn!("Installer for {} could not start: {}", spec.name, e);
            ToolStatus::Missing { found_at: None }
        }
    }
}
