//! Configuration validation rules.
//!
//! - The tool name must be a bare, non-empty binary name
//! - The install command must not be empty

use crate::config::schema::UvCheckConfig;
use crate::error::{Result, UvCheckError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &UvCheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let name = config.tool.name.trim();

    if name.is_empty() {
        errors.push(ValidationError {
            rule: "empty-tool-name".to_string(),
            message: "tool.name must not be empty".to_string(),
        });
    } else if name.chars().any(char::is_whitespace) {
        errors.push(ValidationError {
            rule: "invalid-tool-name".to_string(),
            message: format!(
                "tool.name '{}' must be a binary name; put arguments in tool.version_args",
                name
            ),
        });
    }

    if config.tool.install_command.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-install-command".to_string(),
            message: "tool.install_command must not be empty".to_string(),
        });
    }

    errors
}

/// Validate and return a single error joining every message.
pub fn validate(config: &UvCheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(UvCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
