//! Highlighting errors.

use thiserror::Error;

/// Errors that can occur while configuring or producing highlighted output.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown token category '{0}'")]
    UnknownCategory(String),

    #[error("unknown output format '{0}' (expected terminal, html or json)")]
    UnknownFormat(String),
}
