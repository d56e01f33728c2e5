//! Themes and output formatters for highlighted Morphyn source.
//! 高亮 Morphyn 源码的主题和输出格式化器。
//!
//! This crate takes the token stream produced by `morphyn-lexer` and renders
//! it for terminals, web pages, tooling (JSON) and editors (semantic tokens).
//! 本 crate 接收 `morphyn-lexer` 生成的 token 流，并为终端、网页、
//! 工具（JSON）和编辑器（语义 token）渲染输出。

mod error;
mod formatter;
mod html;
mod json;
pub mod semantic;
mod terminal;
pub mod theme;

pub use error::HighlightError;
pub use formatter::{FORMATTER_NAMES, Formatter, formatter_by_name};
pub use html::{HtmlFormatter, HtmlOptions, css_class, escape_html};
pub use json::JsonFormatter;
pub use semantic::{SemanticToken, generate_semantic_tokens};
pub use terminal::TerminalFormatter;
pub use theme::{Color, Style, Theme};

use morphyn_lexer::{Token, tokenize};

/// Tokenize and render Morphyn source with `formatter`.
/// 使用 `formatter` 对 Morphyn 源码进行切分和渲染。
pub fn highlight(source: &str, formatter: &dyn Formatter) -> Result<String, HighlightError> {
    let tokens: Vec<Token<'_>> = tokenize(source).collect();
    tracing::debug!(
        tokens = tokens.len(),
        formatter = formatter.name(),
        "highlighting source"
    );
    formatter.format(&tokens)
}
