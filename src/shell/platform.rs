//! Platform-specific shell detection.

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).is_ok())
}

/// CI detection with a custom env lookup, for tests.
pub fn is_ci_with_env<F>(has_var: F) -> bool
where
    F: Fn(&str) -> bool,
{
    const CI_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    CI_VARS.iter().any(|var| has_var(var))
}

/// The shell and flag used to run a command line.
///
/// Installer scripts are piped (`curl ... | sh`), so they need a POSIX shell
/// rather than the user's login shell.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
