//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{Result, UvCheckError};

use super::Prompt;

fn map_dialoguer_err(e: dialoguer::Error) -> UvCheckError {
    UvCheckError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on the terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_map_to_io() {
        let err = map_dialoguer_err(dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "interrupted",
        )));
        assert!(matches!(err, UvCheckError::Io(_)));
    }

    #[test]
    fn prompt_theme_has_empty_prefix() {
        let theme = prompt_theme();
        assert_eq!(theme.prompt_prefix.to_string(), "");
    }
}
