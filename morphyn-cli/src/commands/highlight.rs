//! The `morphyn highlight` command.
//! `morphyn highlight` 命令。

use super::load_input;
use crate::output;
use morphyn_highlight::{Formatter, HtmlFormatter, HtmlOptions, Theme, formatter_by_name};
use morphyn_lexer::Token;
use std::io;

/// Options for the highlight command.
/// 高亮命令的选项。
pub struct Options {
    pub format: String,
    pub theme: Option<String>,
    pub full: bool,
    pub line_numbers: bool,
}

/// Highlight a file to stdout.
/// 将文件高亮输出到标准输出。
pub fn run(file: &str, lexer: Option<&str>, options: &Options) -> Result<(), String> {
    let input = load_input(file, lexer)?;

    let theme = match &options.theme {
        Some(path) => {
            Theme::load(path).map_err(|e| format!("cannot load theme '{}': {}", path, e))?
        }
        None => Theme::default(),
    };

    let is_html = options.format.eq_ignore_ascii_case("html");
    if (options.full || options.line_numbers) && !is_html {
        output::warning("--full and --line-numbers only apply to HTML output");
    }

    let formatter: Box<dyn Formatter> = if is_html {
        Box::new(HtmlFormatter::new(theme).with_options(HtmlOptions {
            full_document: options.full,
            line_numbers: options.line_numbers,
            title: input.name.clone(),
            ..HtmlOptions::default()
        }))
    } else {
        formatter_by_name(&options.format, theme).map_err(|e| e.to_string())?
    };

    let tokens: Vec<Token<'_>> = input.lexer.tokenize(&input.source).collect();
    tracing::debug!(
        tokens = tokens.len(),
        formatter = formatter.name(),
        "highlighting"
    );

    formatter
        .write_to(&tokens, &mut io::stdout().lock())
        .map_err(|e| e.to_string())
}
