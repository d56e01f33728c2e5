//! CLI command implementations.

pub mod check;
pub mod highlight;
pub mod info;
pub mod tokens;

use morphyn_lexer::LexerInfo;
use morphyn_lexer::registry::{find_by_alias, find_by_filename};
use std::fs;
use std::io::Read;

/// A source text together with the lexer chosen for it.
/// 源文本及为其选择的词法分析器。
#[derive(Debug)]
pub struct Input {
    /// Name used in messages and diagnostics. / 用于消息和诊断的名称。
    pub name: String,
    pub source: String,
    pub lexer: &'static LexerInfo,
}

/// Read `file` (or stdin for `-`) and pick its lexer.
/// 读取 `file`（`-` 表示标准输入）并选择其词法分析器。
///
/// An explicit alias wins over the file name.
/// 显式别名优先于文件名。
pub fn load_input(file: &str, alias: Option<&str>) -> Result<Input, String> {
    let lexer = match alias {
        Some(alias) => find_by_alias(alias).ok_or_else(|| format!("unknown lexer '{}'", alias))?,
        None if file == "-" => {
            return Err("reading from stdin requires --lexer".to_string());
        }
        None => find_by_filename(file).ok_or_else(|| {
            format!("no lexer registered for '{}' (use --lexer to choose one)", file)
        })?,
    };

    let (name, source) = if file == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        ("<stdin>".to_string(), source)
    } else {
        let source =
            fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;
        (file.to_string(), source)
    };

    tracing::debug!(file = %name, lexer = lexer.name, bytes = source.len(), "loaded input");
    Ok(Input {
        name,
        source,
        lexer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphyn_lexer::MORPHYN;
    use std::io::Write;

    fn temp_source(suffix: &str, text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lexer_from_file_name() {
        let file = temp_source(".morph", "entity A {}");
        let path = file.path().to_str().unwrap();

        let input = load_input(path, None).unwrap();
        assert_eq!(input.lexer, &MORPHYN);
        assert_eq!(input.name, path);
        assert_eq!(input.source, "entity A {}");
    }

    #[test]
    fn test_alias_wins_over_file_name() {
        let file = temp_source(".txt", "on spawn {}");
        let path = file.path().to_str().unwrap();

        let input = load_input(path, Some("MRPH")).unwrap();
        assert_eq!(input.lexer, &MORPHYN);
        assert_eq!(input.source, "on spawn {}");
    }

    #[test]
    fn test_stdin_requires_lexer() {
        let err = load_input("-", None).unwrap_err();
        assert!(err.contains("--lexer"), "{err}");
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_input("zombie.rs", None).unwrap_err();
        assert!(err.contains("no lexer registered for 'zombie.rs'"), "{err}");
    }

    #[test]
    fn test_unknown_alias() {
        let err = load_input("zombie.morph", Some("python")).unwrap_err();
        assert_eq!(err, "unknown lexer 'python'");
    }

    #[test]
    fn test_missing_file() {
        let err = load_input("/nonexistent/zombie.morph", None).unwrap_err();
        assert!(err.starts_with("cannot read file '/nonexistent/zombie.morph'"), "{err}");
    }
}
