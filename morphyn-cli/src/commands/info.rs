//! The `morphyn info` command.
//! `morphyn info` 命令。

use morphyn_highlight::FORMATTER_NAMES;
use morphyn_lexer::Category;
use morphyn_lexer::registry::LEXERS;

/// Print the registered lexers and what they produce.
/// 打印已注册的词法分析器及其输出内容。
pub fn run() -> Result<(), String> {
    for info in LEXERS {
        println!("{}", info.name);
        println!("  aliases:   {}", info.aliases.join(", "));
        println!("  filenames: {}", info.filenames.join(", "));
    }

    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
    println!("categories: {}", categories.join(", "));
    println!("formats:    {}", FORMATTER_NAMES.join(", "));
    Ok(())
}
