//! Lookup of installed binaries outside the current PATH.
//!
//! Shell installers drop binaries into per-user directories such as
//! `~/.local/bin` and then ask the user to restart their shell. Until that
//! happens, `uv --version` fails even though the install succeeded. This
//! module finds such binaries so the report can point at the PATH problem
//! instead of suggesting a reinstall.
//!
//! # Example
//!
//! ```no_run
//! use uv_check::requirements::probe::find_outside_path;
//!
//! if let Some(path) = find_outside_path("uv") {
//!     println!("uv is installed at {} but not on PATH", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File name of a tool's binary on this platform (`uv` or `uv.exe`).
pub fn binary_name(tool: &str) -> String {
    format!("{}{}", tool, std::env::consts::EXE_SUFFIX)
}

/// Resolve a tool's binary path by iterating over directories.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let name = binary_name(tool);
    for dir in dirs {
        let candidate = dir.join(&name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Directories shell installers commonly write binaries to.
///
/// Environment overrides come first (`XDG_BIN_HOME`, `CARGO_HOME/bin`),
/// then the defaults relative to `home`. Duplicates are removed.
pub fn installer_bin_dirs<F>(home: &Path, env_fn: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut dirs = Vec::new();

    if let Ok(xdg) = env_fn("XDG_BIN_HOME") {
        dirs.push(PathBuf::from(xdg));
    }
    if let Ok(cargo_home) = env_fn("CARGO_HOME") {
        dirs.push(PathBuf::from(cargo_home).join("bin"));
    }
    dirs.push(home.join(".local").join("bin"));
    dirs.push(home.join(".cargo").join("bin"));

    let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !unique.contains(&dir) {
            unique.push(dir);
        }
    }
    unique
}

/// Find `tool` in an installer directory that is not on the system PATH.
pub fn find_outside_path(tool: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let candidates = installer_bin_dirs(&home, |key: &str| std::env::var(key));
    find_outside_path_in(tool, &candidates, &parse_system_path())
}

/// Core of [`find_outside_path`] with explicit candidate and PATH lists.
pub fn find_outside_path_in(
    tool: &str,
    candidates: &[PathBuf],
    system_path: &[PathBuf],
) -> Option<PathBuf> {
    let off_path: Vec<PathBuf> = candidates
        .iter()
        .filter(|dir| !system_path.contains(dir))
        .cloned()
        .collect();
    let found = resolve_tool_path(tool, &off_path);
    if let Some(path) = &found {
        tracing::debug!("Found {} outside PATH at {}", tool, path.display());
    }
    found
}
