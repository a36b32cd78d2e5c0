//! Output mode.

use std::str::FromStr;

use crate::config::schema;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything.
    Verbose,
    /// Show the report and status.
    #[default]
    Normal,
    /// Show minimal output (spinners + final status).
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<schema::OutputMode> for OutputMode {
    fn from(config_mode: schema::OutputMode) -> Self {
        match config_mode {
            schema::OutputMode::Verbose => Self::Verbose,
            schema::OutputMode::Normal => Self::Normal,
            schema::OutputMode::Quiet => Self::Quiet,
            schema::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Pick the mode from CLI flags, falling back to the configured one.
    pub fn resolve(verbose: bool, quiet: bool, configured: Option<schema::OutputMode>) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            configured.map(Self::from).unwrap_or_default()
        }
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_shows_spinners() {
        assert!(OutputMode::Verbose.shows_spinners());
        assert!(OutputMode::Normal.shows_spinners());
        assert!(OutputMode::Quiet.shows_spinners());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn from_config_covers_every_mode() {
        assert_eq!(OutputMode::from(schema::OutputMode::Verbose), OutputMode::Verbose);
        assert_eq!(OutputMode::from(schema::OutputMode::Normal), OutputMode::Normal);
        assert_eq!(OutputMode::from(schema::OutputMode::Quiet), OutputMode::Quiet);
        assert_eq!(OutputMode::from(schema::OutputMode::Silent), OutputMode::Silent);
    }

    #[test]
    fn flags_override_config() {
        let configured = Some(schema::OutputMode::Silent);
        assert_eq!(OutputMode::resolve(false, true, configured), OutputMode::Quiet);
        assert_eq!(OutputMode::resolve(true, false, configured), OutputMode::Verbose);
        assert_eq!(OutputMode::resolve(false, false, configured), OutputMode::Silent);
    }

    #[test]
    fn no_flags_or_config_is_normal() {
        assert_eq!(OutputMode::resolve(false, false, None), OutputMode::Normal);
    }
}
