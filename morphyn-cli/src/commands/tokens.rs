//! The `morphyn tokens` command.
//! `morphyn tokens` 命令。

use super::load_input;
use morphyn_highlight::{Formatter, JsonFormatter};
use morphyn_lexer::Token;
use std::io::{self, Write};

/// Print every token of a file, one per line.
/// 打印文件的每个 token，每行一个。
pub fn run(file: &str, lexer: Option<&str>, json: bool) -> Result<(), String> {
    let input = load_input(file, lexer)?;
    let tokens: Vec<Token<'_>> = input.lexer.tokenize(&input.source).collect();

    let mut stdout = io::stdout().lock();
    if json {
        JsonFormatter::new()
            .write_to(&tokens, &mut stdout)
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    for token in &tokens {
        // Debug formatting escapes newlines and quotes in the lexeme
        // Debug 格式会转义词素中的换行和引号
        writeln!(
            stdout,
            "{:<10} {:<20} {:?}",
            token.span.to_string(),
            token.category.name(),
            token.text
        )
        .map_err(|e| format!("cannot write output: {}", e))?;
    }

    tracing::debug!(tokens = tokens.len(), "printed tokens");
    Ok(())
}
