//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`PlainUI`] for piped or redirected standard streams
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use app_packager::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("choice", "2");
//!
//! ui.message("Checking npm installation...");
//! let answer = ui.prompt(&Prompt::new("choice", "Enter your choice (1-3)")).unwrap();
//!
//! assert_eq!(answer, "2");
//! assert!(ui.has_message("Checking npm"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::PlainUI;
pub use prompts::{prompt_user, strip_line_ending};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PackagerTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner line.
    fn show_header(&mut self, title: &str);

    /// Show a prompt and read one line of input.
    ///
    /// The returned text has its line ending removed and is otherwise
    /// exactly what was typed. End of input yields an empty string.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A free-form text prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a new prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_creation() {
        let prompt = Prompt::new("choice", "Enter your choice (1-3)");
        assert_eq!(prompt.key, "choice");
        assert_eq!(prompt.question, "Enter your choice (1-3)");
    }
}
