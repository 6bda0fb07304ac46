//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use app_packager::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking npm installation...");
//! ui.error("Error checking npm: not found");
//!
//! assert!(ui.has_message("Checking npm"));
//! assert!(ui.has_error("not found"));
//! assert_eq!(ui.transcript().len(), 2);
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every line in a single ordered transcript as well as per-kind
/// lists. Prompt answers are configured per key with `set_prompt_response`.
#[derive(Debug, Default)]
pub struct MockUI {
    transcript: Vec<String>,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Every captured line, in the order it was shown.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.transcript.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.transcript.push(msg.to_string());
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.transcript.push(msg.to_string());
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.transcript.push(title.to_string());
        self.headers.push(title.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        // Unconfigured prompts behave like end of input
        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .cloned()
            .unwrap_or_default())
    }
}
