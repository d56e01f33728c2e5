//! The formatter interface and lookup by name.

use crate::{HighlightError, HtmlFormatter, JsonFormatter, TerminalFormatter, Theme};
use morphyn_lexer::Token;
use std::io::Write;

/// Renders a token stream into some textual output.
pub trait Formatter {
    /// Short name used on the command line.
    fn name(&self) -> &'static str;

    /// Render `tokens` to a string.
    fn format(&self, tokens: &[Token<'_>]) -> Result<String, HighlightError>;

    /// Render `tokens` into a writer.
    fn write_to(&self, tokens: &[Token<'_>], out: &mut dyn Write) -> Result<(), HighlightError> {
        let rendered = self.format(tokens)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Names accepted by [`formatter_by_name`].
pub const FORMATTER_NAMES: &[&str] = &["terminal", "ansi", "html", "json"];

/// Build a formatter from its command-line name.
pub fn formatter_by_name(name: &str, theme: Theme) -> Result<Box<dyn Formatter>, HighlightError> {
    match name.to_ascii_lowercase().as_str() {
        "terminal" | "ansi" => Ok(Box::new(TerminalFormatter::new(theme))),
        "html" => Ok(Box::new(HtmlFormatter::new(theme))),
        "json" => Ok(Box::new(JsonFormatter::new())),
        _ => Err(HighlightError::UnknownFormat(name.to_string())),
    }
}
