//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::theme::UvCheckTheme;
use super::{parse_confirm, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts, e.g.
/// `UV_CHECK_PROMPT_INSTALL=yes`.
pub const PROMPT_ENV_PREFIX: &str = "UV_CHECK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Output is plain text. Prompts are answered from `UV_CHECK_PROMPT_<KEY>`
/// variables, then from the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        match self.env_overrides.get(&env_key) {
            Some(value) => Ok(parse_confirm(value)),
            None => Ok(prompt.default),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            show: self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("   {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final line.
struct LineSpinner {
    show: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show {
            println!("{}", UvCheckTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", UvCheckTheme::plain().format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.show {
            println!("{}", UvCheckTheme::plain().format_skipped(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_override_can_decline() {
        let mut overrides = HashMap::new();
        overrides.insert("UV_CHECK_PROMPT_INSTALL".to_string(), "no".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui
            .prompt(&Prompt::confirm("install", "Install uv?", true))
            .unwrap();
        assert!(!result);
    }

    #[test]
    fn confirm_override_is_parsed_as_bool() {
        let mut overrides = HashMap::new();
        overrides.insert("UV_CHECK_PROMPT_INSTALL".to_string(), "yes".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui
            .prompt(&Prompt::confirm("install", "Install uv?", false))
            .unwrap();
        assert!(result);
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let result = ui
            .prompt(&Prompt::confirm("install", "Install uv?", false))
            .unwrap();
        assert!(!result);
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn line_spinner_accepts_all_calls() {
        let mut spinner = LineSpinner { show: false };
        spinner.set_message("test");
        spinner.finish_success("done");
        spinner.finish_skipped("skipped");
    }
}
