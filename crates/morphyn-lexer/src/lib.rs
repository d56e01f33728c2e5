//! Syntax-highlighting lexer for Morphyn.
//! Morphyn 语法高亮词法分析器。
//!
//! This crate turns Morphyn source text into a lossless stream of
//! categorized tokens for highlighting.
//! 本 crate 将 Morphyn 源文本转换为无损的分类 token 流，用于语法高亮。

mod lexer;
mod lint;
pub mod registry;
pub mod rules;
mod token;

pub use lexer::{Lexer, Mode};
pub use lint::lint;
pub use registry::{LexerInfo, MORPHYN};
pub use token::{Category, Token};

/// Tokenize Morphyn source text.
/// 对 Morphyn 源文本进行词法分析。
///
/// The returned lexer is a lazy iterator; a fresh call scans from the start.
/// 返回的词法分析器是惰性迭代器；重新调用会从头扫描。
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
