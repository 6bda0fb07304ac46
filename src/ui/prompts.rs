//! Interactive prompts.

use std::io::BufRead;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{PackagerError, Result};

use super::Prompt;

/// Convert dialoguer errors to PackagerError.
fn map_dialoguer_err(e: dialoguer::Error) -> PackagerError {
    PackagerError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for one line of text on a terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let answer: String = Input::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(strip_line_ending(&answer).to_string())
}

/// Read one line from `reader`, without its line ending.
///
/// End of input yields an empty string.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(strip_line_ending(&line).to_string())
}

/// Remove one trailing `\n` or `\r\n`. Other whitespace is kept.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
