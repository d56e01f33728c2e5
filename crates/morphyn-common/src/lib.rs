//! Common utilities and data structures for the Morphyn highlighter.
//!
//! This crate provides foundational types shared by the lexer and renderers:
//! - `Span`: Source code location tracking
//! - `LineIndex`: Byte offset to line/column conversion

mod lines;
mod span;

pub use lines::LineIndex;
pub use span::{BytePos, Span};
