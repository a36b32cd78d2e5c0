//! Tool presence checks.
//!
//! A tool counts as installed when `<tool> <version_args>` can be spawned
//! and exits 0. Anything else (not on PATH, permission denied, non-zero
//! exit) counts as missing.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::requirements::probe::find_outside_path;
use crate::requirements::status::ToolStatus;
use crate::shell::CommandRunner;

/// The official uv installer, piped into `sh`.
pub const UV_INSTALL_COMMAND: &str = "curl -LsSf https://astral.sh/uv/install.sh | sh";

/// Matches the first dotted version number in version output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\d+(?:\.\d+)?(?:[-+][0-9A-Za-z.\-]+)?")
        .expect("VERSION_REGEX must compile")
});

/// The tool to check and how to install it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Binary name looked up on PATH.
    pub name: String,
    /// Arguments that make the binary print its version and exit 0.
    pub version_args: Vec<String>,
    /// Shell command line that installs the tool.
    pub install_command: String,
}

impl Default for ToolSpec {
    fn default() -> Self {
        Self::uv()
    }
}

impl ToolSpec {
    /// The uv package manager with its official installer.
    pub fn uv() -> Self {
        Self {
            name: "uv".to_string(),
            version_args: vec!["--version".to_string()],
            install_command: UV_INSTALL_COMMAND.to_string(),
        }
    }

    /// The version command as a display string (e.g. `uv --version`).
    pub fn version_command(&self) -> String {
        let args: Vec<&str> = self.version_args.iter().map(String::as_str).collect();
        crate::shell::render_command(&self.name, &args)
    }
}

/// Check whether the tool is installed.
///
/// When it is missing, installer directories outside PATH are searched so
/// the caller can tell "not installed" from "installed but not on PATH".
pub fn check_tool(runner: &dyn CommandRunner, spec: &ToolSpec) -> ToolStatus {
    check_tool_with_probe(runner, spec, find_outside_path)
}

/// [`check_tool`] with a custom off-PATH lookup.
pub fn check_tool_with_probe<F>(runner: &dyn CommandRunner, spec: &ToolSpec, probe: F) -> ToolStatus
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let args: Vec<&str> = spec.version_args.iter().map(String::as_str).collect();

    match runner.run(&spec.name, &args, None) {
        Ok(result) if result.success => {
            let version = parse_version(&result.stdout);
            tracing::debug!("{} is installed (version {:?})", spec.name, version);
            ToolStatus::Installed { version }
        }
        Ok(result) => {
            tracing::debug!(
                "`{}` exited with {:?}; treating {} as missing",
                spec.version_command(),
                result.exit_code,
                spec.name
            );
            ToolStatus::Missing {
                found_at: probe(&spec.name),
            }
        }
        Err(e) => {
            tracing::debug!("{}; treating {} as missing", e, spec.name);
            ToolStatus::Missing {
                found_at: probe(&spec.name),
            }
        }
    }
}

/// Check whether the tool is installed, as a plain boolean.
pub fn is_installed(runner: &dyn CommandRunner, spec: &ToolSpec) -> bool {
    check_tool_with_probe(runner, spec, |_| None).is_installed()
}

/// Extract a version number from `--version` output.
///
/// `uv 0.5.1 (f1b5b8e 2024-11-19)` yields `0.5.1`.
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .find(output)
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    fn no_probe(_: &str) -> Option<PathBuf> {
        None
    }

    #[test]
    fn installed_when_version_exits_zero() {
        let runner = ScriptedRunner::new().then_ok("uv 0.5.1 (f1b5b8e 2024-11-19)\n");
        let status = check_tool_with_probe(&runner, &ToolSpec::uv(), no_probe);

        assert!(status.is_installed());
        assert_eq!(status.version(), Some("0.5.1"));
        assert_eq!(runner.calls(), vec!["uv --version"]);
    }

    #[test]
    fn missing_when_binary_not_found() {
        let runner = ScriptedRunner::new().then_not_found();
        let status = check_tool_with_probe(&runner, &ToolSpec::uv(), no_probe);

        assert_eq!(status, ToolStatus::Missing { found_at: None });
    }

    #[test]
    fn missing_when_version_command_fails() {
        let runner = ScriptedRunner::new().then_exit(1);
        let status = check_tool_with_probe(&runner, &ToolSpec::uv(), no_probe);

        assert!(!status.is_installed());
    }

    #[test]
    fn missing_records_off_path_binary() {
        let runner = ScriptedRunner::new().then_not_found();
        let status = check_tool_with_probe(&runner, &ToolSpec::uv(), |name| {
            Some(PathBuf::from(format!("/home/dev/.local/bin/{}", name)))
        });

        assert_eq!(
            status.found_at(),
            Some(&PathBuf::from("/home/dev/.local/bin/uv"))
        );
    }

    #[test]
    fn is_installed_returns_bool() {
        let runner = ScriptedRunner::new().then_ok("uv 0.4.0\n").then_not_found();
        assert!(is_installed(&runner, &ToolSpec::uv()));
        assert!(!is_installed(&runner, &ToolSpec::uv()));
    }

    #[test]
    fn custom_version_args_are_used() {
        let spec = ToolSpec {
            name: "pipx".to_string(),
            version_args: vec!["version".to_string()],
            install_command: "python3 -m pip install --user pipx".to_string(),
        };
        let runner = ScriptedRunner::new().then_ok("1.7.1\n");
        assert!(is_installed(&runner, &spec));
        assert_eq!(runner.calls(), vec!["pipx version"]);
    }

    #[test]
    fn parse_version_handles_common_formats() {
        assert_eq!(parse_version("uv 0.5.1 (f1b5b8e 2024-11-19)"), Some("0.5.1".into()));
        assert_eq!(parse_version("git version 2.43.0"), Some("2.43.0".into()));
        assert_eq!(parse_version("tool 1.2"), Some("1.2".into()));
        assert_eq!(parse_version("uv 0.6.0-rc.1"), Some("0.6.0-rc.1".into()));
        assert_eq!(parse_version("no version here"), None);
    }

    #[test]
    fn default_spec_is_uv() {
        let spec = ToolSpec::default();
        assert_eq!(spec.name, "uv");
        assert_eq!(spec.version_command(), "uv --version");
        assert_eq!(spec.install_command, UV_INSTALL_COMMAND);
    }
}
