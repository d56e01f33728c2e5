//! Lexer metadata and lookup.
//!
//! Hosts that pick a lexer by language name or by file name use these
//! entries; the tokenizer itself does not depend on them.

use crate::Lexer;
use glob::Pattern;
use std::path::Path;

/// Name, aliases and file patterns a lexer is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    /// Human-readable name.
    pub name: &'static str,
    /// Short names accepted by `find_by_alias`.
    pub aliases: &'static [&'static str],
    /// Glob patterns matched against the file name component.
    pub filenames: &'static [&'static str],
}

/// The Morphyn lexer entry.
pub const MORPHYN: LexerInfo = LexerInfo {
    name: "Morphyn",
    aliases: &["morphyn", "mrph"],
    filenames: &["*.morphyn", "*.mrph", "*.morph"],
};

/// Every registered lexer.
pub static LEXERS: &[LexerInfo] = &[MORPHYN];

impl LexerInfo {
    /// Tokenize `source` with this lexer.
    pub fn tokenize<'src>(&self, source: &'src str) -> Lexer<'src> {
        Lexer::new(source)
    }

    /// Case-insensitive alias match.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Match the file name of `path` against the filename patterns.
    pub fn matches_filename(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .any(|pattern| Pattern::new(pattern).is_ok_and(|glob| glob.matches(name)))
    }
}

/// Find a lexer by one of its aliases.
pub fn find_by_alias(alias: &str) -> Option<&'static LexerInfo> {
    LEXERS.iter().find(|info| info.matches_alias(alias))
}

/// Find a lexer whose filename patterns match `path`.
pub fn find_by_filename(path: impl AsRef<Path>) -> Option<&'static LexerInfo> {
    let path = path.as_ref();
    LEXERS.iter().find(|info| info.matches_filename(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filename() {
        assert!(MORPHYN.matches_filename(Path::new("game.mrph")));
        assert!(MORPHYN.matches_filename(Path::new(".mrph")));
        assert!(MORPHYN.matches_filename(Path::new("levels/boss.morph")));
        assert!(!MORPHYN.matches_filename(Path::new("game.mrph.bak")));
        assert!(!MORPHYN.matches_filename(Path::new("morph")));
        assert!(!MORPHYN.matches_filename(Path::new("levels/")));
    }

    #[test]
    fn test_filename_wildcards() {
        let info = LexerInfo {
            name: "Test",
            aliases: &[],
            filenames: &["a?c", "[invalid"],
        };
        assert!(info.matches_filename(Path::new("abc")));
        assert!(!info.matches_filename(Path::new("abbc")));
        assert!(!info.matches_filename(Path::new("[invalid")));
    }

    #[test]
    fn test_find_by_alias() {
        assert_eq!(find_by_alias("mrph"), Some(&MORPHYN));
        assert_eq!(find_by_alias("MORPHYN"), Some(&MORPHYN));
        assert_eq!(find_by_alias("python"), None);
    }

    #[test]
    fn test_find_by_filename() {
        assert_eq!(find_by_filename("scripts/zombie.morph"), Some(&MORPHYN));
        assert_eq!(find_by_filename("zombie.morphyn"), Some(&MORPHYN));
        assert_eq!(find_by_filename("zombie.rs"), None);
        assert_eq!(find_by_filename(""), None);
    }
}
