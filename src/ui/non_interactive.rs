//! Plain UI for piped or redirected standard streams.

use std::io::Write;

use crate::error::Result;

use super::prompts::read_line;
use super::{Prompt, UserInterface};

/// UI implementation used when stdin or stdout is not a terminal.
///
/// Writes undecorated lines to stdout and reads answers straight from
/// stdin, so scripted input (`echo 1 | app-packager`) works.
#[derive(Debug, Default)]
pub struct PlainUI;

impl PlainUI {
    /// Create a new plain UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for PlainUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("{}", title);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}: ", prompt.question)?;
        stdout.flush()?;

        read_line(&mut std::io::stdin().lock())
    }
}

