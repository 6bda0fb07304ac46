//! Interactive terminal UI.

use std::io::{IsTerminal, Write};

use console::Term;

use crate::error::Result;

use super::{prompt_user, should_use_colors, PackagerTheme, PlainUI, Prompt, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: PackagerTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            PackagerTheme::new()
        } else {
            PackagerTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }
}

/// Create the appropriate UI for the current standard streams.
pub fn create_ui() -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(PlainUI::new())
    }
}
