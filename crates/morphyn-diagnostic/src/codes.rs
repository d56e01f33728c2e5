//! Diagnostic codes for Morphyn lint warnings.

/// Stable code attached to every lint warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// W0001: `/*` without a matching `*/`.
    UnterminatedComment,
    /// W0002: `"` without a closing quote.
    UnterminatedString,
    /// W0003: characters no rule recognizes.
    UnexpectedCharacter,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedComment => "W0001",
            ErrorCode::UnterminatedString => "W0002",
            ErrorCode::UnexpectedCharacter => "W0003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
