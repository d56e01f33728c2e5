//! ANSI terminal output.

use crate::theme::Style;
use crate::{Formatter, HighlightError, Theme};
use morphyn_lexer::Token;

const RESET: &str = "\x1b[0m";

/// Colors tokens with 24-bit ANSI escape sequences.
///
/// Styles are closed before every newline.
#[derive(Debug, Clone, Default)]
pub struct TerminalFormatter {
    theme: Theme,
}

impl TerminalFormatter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

/// The SGR escape that switches to `style`, or `None` for plain text.
fn escape(style: Style) -> Option<String> {
    let mut codes = Vec::new();
    if style.bold {
        codes.push("1".to_string());
    }
    if style.italic {
        codes.push("3".to_string());
    }
    if let Some(c) = style.color {
        codes.push(format!("38;2;{};{};{}", c.r, c.g, c.b));
    }

    if codes.is_empty() {
        None
    } else {
        Some(format!("\x1b[{}m", codes.join(";")))
    }
}

impl Formatter for TerminalFormatter {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, HighlightError> {
        let mut output = String::new();

        for token in tokens {
            let Some(open) = escape(self.theme.style(token.category)) else {
                output.push_str(token.text);
                continue;
            };

            for line in token.text.split_inclusive('\n') {
                let (content, newline) = match line.strip_suffix('\n') {
                    Some(content) => (content, "\n"),
                    None => (line, ""),
                };
                if !content.is_empty() {
                    output.push_str(&open);
                    output.push_str(content);
                    output.push_str(RESET);
                }
                output.push_str(newline);
            }
        }

        Ok(output)
    }
}
