//! The `morphyn check` command.
//! `morphyn check` 命令。

use super::load_input;
use crate::output;
use morphyn_diagnostic::emit;
use morphyn_lexer::lint;

/// Report malformed constructs in a file.
/// 报告文件中的畸形结构。
///
/// Problems are warnings: the file still highlights, so the command succeeds.
/// 问题均为警告：文件仍可高亮，因此命令成功。
pub fn run(file: &str, lexer: Option<&str>) -> Result<(), String> {
    let input = load_input(file, lexer)?;
    let diagnostics = lint(&input.source);

    let color = output::stderr_color();
    for diag in &diagnostics {
        emit(&input.source, &input.name, diag, color, std::io::stderr())
            .map_err(|e| format!("cannot write diagnostic: {}", e))?;
    }

    if diagnostics.is_empty() {
        output::success(&format!("OK - {} has no problems", input.name));
    } else {
        output::warning(&format!("{} problem(s) found", diagnostics.len()));
    }
    Ok(())
}
