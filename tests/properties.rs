//! Property tests for the lexer's lossless, gap-free output.

use morphyn_lexer::rules::is_space;
use morphyn_lexer::{Category, lint, tokenize};
use proptest::prelude::*;

/// Fragments that exercise every rule and the interesting boundaries between them.
fn morphyn_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("entity".to_string()),
        Just("on".to_string()),
        Just("has".to_string()),
        Just("self".to_string()),
        Just("remove_at".to_string()),
        Just("order".to_string()),
        Just("Zombie".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("//".to_string()),
        Just("#".to_string()),
        Just("\"".to_string()),
        Just("->".to_string()),
        Just("<=".to_string()),
        Just("1.5".to_string()),
        Just("1.".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("é".to_string()),
        Just("\u{1c}".to_string()),
        "[a-zA-Z0-9_{}()\\[\\]:,.=!<>+*/%@ ]{1,4}",
    ]
}

fn morphyn_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(morphyn_fragment(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn round_trip_any_text(source in any::<String>()) {
        let text: String = tokenize(&source).map(|t| t.text).collect();
        prop_assert_eq!(text, source);
    }

    #[test]
    fn round_trip_morphyn_like(source in morphyn_like()) {
        let text: String = tokenize(&source).map(|t| t.text).collect();
        prop_assert_eq!(text, source);
    }

    #[test]
    fn spans_cover_input_without_gaps(source in morphyn_like()) {
        let mut cursor = 0usize;
        for token in tokenize(&source) {
            prop_assert_eq!(usize::from(token.span.start), cursor);
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(&source[token.span.range()], token.text);
            cursor = token.span.end.into();
        }
        prop_assert_eq!(cursor, source.len());
    }

    #[test]
    fn whitespace_tokens_are_only_whitespace(source in morphyn_like()) {
        for token in tokenize(&source).filter(|t| t.category == Category::Whitespace) {
            prop_assert!(token.text.chars().all(is_space));
        }
    }

    #[test]
    fn lint_never_panics(source in morphyn_like()) {
        for diag in lint(&source) {
            prop_assert!(diag.span.range().end <= source.len());
        }
    }
}
