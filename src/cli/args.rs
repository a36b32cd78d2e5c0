//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Check for the uv package manager, install it, and verify the git checkout
/// matches its remote.
#[derive(Debug, Parser)]
#[command(name = "uv_check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (skips discovery of .uv_check/config.yml)
    #[arg(short, long, global = true, env = "UV_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report whether the tool is installed (default if no command specified)
    Check(CheckArgs),

    /// Install the tool with its official installer
    Install(InstallArgs),

    /// Fail unless the local branch matches origin
    Sync,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also report whether the git checkout matches origin
    #[arg(long)]
    pub git: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Show what would happen without running the installer
    #[arg(long)]
    pub dry_run: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["uv_check"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn check_flags_parse() {
        let cli = Cli::try_parse_from(["uv_check", "check", "--json", "--git"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert!(args.json);
                assert!(args.git);
            }
            other => panic!("Expected check, got {:?}", other),
        }
    }

    #[test]
    fn install_flags_parse() {
        let cli = Cli::try_parse_from(["uv_check", "install", "--dry-run", "-y"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert!(args.dry_run);
                assert!(args.yes);
            }
            other => panic!("Expected install, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["uv_check", "sync", "--project", "/tmp/repo", "--quiet"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sync)));
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/repo")));
        assert!(cli.quiet);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["uv_check", "-v", "-q"]).is_err());
    }

    #[test]
    fn completions_requires_known_shell() {
        assert!(Cli::try_parse_from(["uv_check", "completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["uv_check", "completions", "tcsh"]).is_err());
    }
}
