//! Warnings about malformed input.
//! 关于畸形输入的警告。
//!
//! The lexer accepts everything. This pass re-reads its output and points at
//! the places where the best-effort classification was needed.
//! 词法分析器接受一切输入。此遍历重新读取其输出，并指出需要尽力分类的位置。

use crate::{Lexer, Mode};
use morphyn_common::Span;
use morphyn_diagnostic::{Diagnostic, ErrorCode, Label};

/// Tokenize `source` and collect warnings for malformed constructs.
/// 切分 `source` 并收集畸形结构的警告。
pub fn lint(source: &str) -> Vec<Diagnostic> {
    let mut lexer = Lexer::new(source);
    let mut diagnostics = Vec::new();
    let mut comment_open: Option<Span> = None;
    // Run of adjacent unexpected characters - 相邻意外字符的连续区间
    let mut stray: Option<Span> = None;

    while let Some(token) = lexer.next() {
        let fallback = token.is_fallback() && token.text != "\"";
        if !fallback {
            if let Some(span) = stray.take() {
                diagnostics.push(unexpected_characters(source, span));
            }
        }

        if token.is_fallback() && token.text == "\"" {
            diagnostics.push(unterminated_string(source, token.span));
        } else if fallback {
            stray = Some(match stray {
                Some(span) => span.merge(token.span),
                None => token.span,
            });
        }

        match lexer.mode() {
            Mode::BlockComment if comment_open.is_none() => comment_open = Some(token.span),
            Mode::BlockComment => {}
            Mode::Default => comment_open = None,
        }
    }

    if let Some(span) = stray {
        diagnostics.push(unexpected_characters(source, span));
    }

    if let Some(open) = comment_open {
        let span = Span::from_usize(open.start.into(), source.len());
        diagnostics.push(
            Diagnostic::new(ErrorCode::UnterminatedComment, span, "unterminated block comment")
                .with_label(Label::new(open, "comment opened here"))
                .with_note("the rest of the file is highlighted as a comment")
                .with_help("close the comment with `*/`"),
        );
    }

    diagnostics
}

fn unterminated_string(source: &str, quote: Span) -> Diagnostic {
    let start: usize = quote.start.into();
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    Diagnostic::new(
        ErrorCode::UnterminatedString,
        Span::from_usize(start, line_end),
        "unterminated string literal",
    )
    .with_label(Label::new(quote, "string starts here"))
    .with_help("add a closing `\"`")
}

fn unexpected_characters(source: &str, span: Span) -> Diagnostic {
    let text = span.slice(source);
    let message = if text.chars().count() == 1 {
        format!("unexpected character: '{}'", text)
    } else {
        format!("unexpected characters: '{}'", text)
    };
    Diagnostic::new(ErrorCode::UnexpectedCharacter, span, message)
        .with_label(Label::new(span, "highlighted as plain text"))
}
