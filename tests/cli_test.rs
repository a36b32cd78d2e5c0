//! Integration tests for the uv_check binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A tool name nothing on the test machine provides.
const MISSING_TOOL_CONFIG: &str = r#"
tool:
  name: uv-check-test-missing-tool
  install_command: "exit 3"
"#;

/// A command isolated from the user's own config and CI detection.
fn uv_check(project: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("uv_check"));
    cmd.current_dir(project)
        .env("HOME", home)
        .env_remove("UV_CHECK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".uv_check");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("uv package manager"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("sync"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn no_args_prints_report_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== UV Installation Checker ==="))
        .stdout(predicate::str::contains("2. Dry run analysis..."))
        .stdout(predicate::str::contains("=== Summary ==="))
        .stdout(predicate::str::contains("Action Required:"));
    Ok(())
}

#[test]
fn check_reports_missing_tool() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    uv_check(temp.path(), temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "   uv-check-test-missing-tool is not installed\n",
        ))
        .stdout(predicate::str::contains("Would install uv-check-test-missing-tool"))
        .stdout(predicate::str::contains("Command: exit 3"))
        .stdout(predicate::str::contains("Action Required: Install"));
    Ok(())
}

#[test]
fn check_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let output = uv_check(temp.path(), temp.path())
        .args(["check", "--json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["tool"], "uv-check-test-missing-tool");
    assert_eq!(value["installed"], false);
    assert_eq!(value["needs_install"], true);
    Ok(())
}

#[test]
fn check_git_outside_repository_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    let output = uv_check(temp.path(), temp.path())
        .args(["check", "--json", "--git"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["git"]["state"], "skipped");
    Ok(())
}

#[test]
fn install_dry_run_prints_plan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    uv_check(temp.path(), temp.path())
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "uv-check-test-missing-tool is not installed and would be installed using: exit 3",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MISSING_TOOL_CONFIG);
    uv_check(temp.path(), temp.path())
        .args(["install", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to install 'uv-check-test-missing-tool'",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_prompt_override_declines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "tool:\n  name: uv-check-test-missing-tool\n  install_command: \"touch installer_ran\"\n",
    );
    uv_check(temp.path(), temp.path())
        .env("UV_CHECK_PROMPT_INSTALL", "no")
        .arg("install")
        .assert()
        .success()
        .stderr(predicate::str::contains("Installation cancelled"));

    assert!(!temp.path().join("installer_ran").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_without_override_takes_default_yes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        "tool:\n  name: uv-check-test-missing-tool\n  install_command: \"touch installer_ran\"\n",
    );
    uv_check(temp.path(), temp.path())
        .env_remove("UV_CHECK_PROMPT_INSTALL")
        .arg("install")
        .assert()
        .code(1);

    assert!(temp.path().join("installer_ran").exists());
    Ok(())
}

#[test]
fn sync_outside_repository_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .arg("sync")
        .assert()
        .success();
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .args(["--config", "does-not-exist.yml", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn config_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("custom.yml");
    fs::write(&config, MISSING_TOOL_CONFIG)?;

    uv_check(temp.path(), temp.path())
        .env("UV_CHECK_CONFIG", &config)
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uv-check-test-missing-tool"));
    Ok(())
}

#[test]
fn invalid_project_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("tool:\n  name: \"\"\n");
    uv_check(temp.path(), temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn silent_mode_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&format!("{}settings:\n  output: silent\n", MISSING_TOOL_CONFIG));
    uv_check(temp.path(), temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    uv_check(temp.path(), temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uv_check"));
    Ok(())
}

// --- Real git repository ---

fn git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@test.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn sync_fails_when_remote_moved_ahead() -> Result<(), Box<dyn std::error::Error>> {
    if !git_available() {
        return Ok(());
    }

    let temp = TempDir::new()?;
    let root = temp.path();
    git(root, &["init", "--bare", "--initial-branch=main", "remote.git"]);
    git(root, &["clone", "remote.git", "first"]);
    git(root, &["clone", "remote.git", "second"]);

    let first = root.join("first");
    let second = root.join("second");
    git(&first, &["checkout", "-B", "main"]);
    fs::write(first.join("a.txt"), "a")?;
    git(&first, &["add", "."]);
    git(&first, &["commit", "-m", "a"]);
    git(&first, &["push", "origin", "main"]);

    git(&second, &["fetch", "origin"]);
    git(&second, &["checkout", "-B", "main", "origin/main"]);

    uv_check(&second, root)
        .arg("sync")
        .assert()
        .success();

    fs::write(first.join("b.txt"), "b")?;
    git(&first, &["add", "."]);
    git(&first, &["commit", "-m", "b"]);
    git(&first, &["push", "origin", "main"]);

    uv_check(&second, root)
        .arg("sync")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Current git representation is not up to date.",
        ))
        .stdout(predicate::str::contains("Please update your repository with:"))
        .stdout(predicate::str::contains("  git pull origin main"));
    Ok(())
}
