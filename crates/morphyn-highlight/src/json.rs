//! JSON token dump.

use crate::{Formatter, HighlightError};
use morphyn_lexer::Token;
use serde::Serialize;

/// One token in the JSON dump.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    category: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
}

/// Writes the token stream as a JSON array of
/// `{ "category", "text", "start", "end" }` objects.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit everything on one line.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String, HighlightError> {
        let records: Vec<TokenRecord<'_>> = tokens
            .iter()
            .map(|token| TokenRecord {
                category: token.category.name(),
                text: token.text,
                start: token.span.start.into(),
                end: token.span.end.into(),
            })
            .collect();

        let mut json = if self.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        json.push('\n');
        Ok(json)
    }
}
