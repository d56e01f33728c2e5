//! Integration tests for morphyn-highlight crate.

use morphyn_highlight::semantic::{encode, token_modifiers, token_types};
use morphyn_highlight::{
    Color, Formatter, HighlightError, HtmlFormatter, HtmlOptions, JsonFormatter, SemanticToken,
    Style, TerminalFormatter, Theme, formatter_by_name, generate_semantic_tokens, highlight,
};
use morphyn_lexer::{Category, Token, tokenize};
use std::io::Write;

const SOURCE: &str = "entity Zombie {\n  has hp: 10 # <3\n}\n";

fn tokens(source: &str) -> Vec<Token<'_>> {
    tokenize(source).collect()
}

/// Remove `ESC [ ... m` sequences.
fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Terminal
// ============================================================================

#[test]
fn test_terminal_preserves_text() {
    let output = highlight(SOURCE, &TerminalFormatter::default()).unwrap();
    assert!(output.contains("\x1b["));
    assert_eq!(strip_ansi(&output), SOURCE);
}

#[test]
fn test_terminal_keyword_escape() {
    let theme = Theme::new().with(
        Category::Keyword,
        Style::color(Color::rgb(1, 2, 3)).bold(),
    );
    let output = highlight("entity", &TerminalFormatter::new(theme)).unwrap();
    assert_eq!(output, "\x1b[1;38;2;1;2;3mentity\x1b[0m");
}

#[test]
fn test_terminal_closes_style_before_newline() {
    let theme = Theme::new().with(Category::Comment, Style::color(Color::rgb(9, 9, 9)));
    let output = highlight("/* a\nb */", &TerminalFormatter::new(theme)).unwrap();
    for line in output.lines() {
        assert!(line.is_empty() || line.ends_with("\x1b[0m"), "line {line:?}");
    }
}

#[test]
fn test_terminal_plain_categories_unstyled() {
    let output = highlight("a , b", &TerminalFormatter::default()).unwrap();
    assert_eq!(output, "a , b");
}

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_html_fragment() {
    let output = highlight("entity Zombie", &HtmlFormatter::default()).unwrap();
    assert_eq!(
        output,
        "<div class=\"highlight\"><pre><code><span class=\"k\">entity</span> <span class=\"nc\">Zombie</span></code></pre></div>\n"
    );
}

#[test]
fn test_html_escapes_text() {
    let output = highlight("a < b # <tag> & \"q\"", &HtmlFormatter::default()).unwrap();
    assert!(output.contains("<span class=\"o-Comparison\">&lt;</span>"));
    assert!(output.contains("<span class=\"c\"># &lt;tag&gt; &amp; &quot;q&quot;</span>"));
}

#[test]
fn test_html_line_numbers() {
    let formatter = HtmlFormatter::default().with_options(HtmlOptions {
        line_numbers: true,
        ..HtmlOptions::default()
    });
    let output = highlight("a\nb", &formatter).unwrap();
    assert!(output.contains("<span class=\"lineno\">1</span><span class=\"n\">a</span>\n"));
    assert!(output.contains("<span class=\"lineno\">2</span><span class=\"n\">b</span>"));
}

#[test]
fn test_html_multiline_comment_split_per_line() {
    let output = highlight("/* a\nb */", &HtmlFormatter::default()).unwrap();
    assert!(output.contains("<span class=\"c\"> a</span>\n<span class=\"c\">b </span>"));
}

#[test]
fn test_html_full_document() {
    let formatter = HtmlFormatter::new(Theme::default().with_background(Color::rgb(0, 0, 0)))
        .with_options(HtmlOptions {
            full_document: true,
            title: "zombie.morph".to_string(),
            ..HtmlOptions::default()
        });
    let output = highlight(SOURCE, &formatter).unwrap();

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<title>zombie.morph</title>"));
    assert!(output.contains(".highlight { background: #000000; }"));
    assert!(output.contains(".highlight .k { color: #008000; font-weight: bold; }"));
    assert!(output.ends_with("</html>\n"));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_dump() {
    let output = JsonFormatter::new().format(&tokens("on hit")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "category": "Keyword", "text": "on", "start": 0, "end": 2 },
            { "category": "Whitespace", "text": " ", "start": 2, "end": 3 },
            { "category": "FunctionName", "text": "hit", "start": 3, "end": 6 },
        ])
    );
}

#[test]
fn test_json_compact_is_single_line() {
    let output = JsonFormatter::new().compact().format(&tokens(SOURCE)).unwrap();
    assert_eq!(output.trim_end().lines().count(), 1);
}

// ============================================================================
// Formatter lookup and writers
// ============================================================================

#[test]
fn test_formatter_by_name() {
    for (name, expected) in [
        ("terminal", "terminal"),
        ("ANSI", "terminal"),
        ("html", "html"),
        ("json", "json"),
    ] {
        let formatter = formatter_by_name(name, Theme::default()).unwrap();
        assert_eq!(formatter.name(), expected);
    }

    let err = formatter_by_name("pdf", Theme::default()).err().unwrap();
    assert!(matches!(err, HighlightError::UnknownFormat(name) if name == "pdf"));
}

#[test]
fn test_write_to() {
    let mut out = Vec::new();
    HtmlFormatter::default()
        .write_to(&tokens("x"), &mut out)
        .unwrap();
    assert!(String::from_utf8(out).unwrap().contains("<span class=\"n\">x</span>"));
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn test_theme_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{
            "name": "night",
            "background": "#101010",
            "styles": {{
                "function-name": {{ "color": "#ffcc00", "italic": true }},
                "Comment": {{ "color": null }}
            }}
        }}"##
    )
    .unwrap();

    let theme = Theme::load(file.path()).unwrap();
    assert_eq!(theme.name(), "night");
    assert_eq!(theme.background(), Some(Color::rgb(0x10, 0x10, 0x10)));
    assert_eq!(
        theme.style(Category::FunctionName),
        Style::color(Color::rgb(0xff, 0xcc, 0x00)).italic()
    );
    assert!(theme.style(Category::Comment).is_plain());
    assert_eq!(
        theme.style(Category::Keyword),
        Theme::default().style(Category::Keyword)
    );
}

#[test]
fn test_theme_load_errors() {
    assert!(matches!(
        Theme::load("/nonexistent/theme.json"),
        Err(HighlightError::Io(_))
    ));
    assert!(matches!(
        Theme::from_json_str("{ not json"),
        Err(HighlightError::Json(_))
    ));
    assert!(matches!(
        Theme::from_json_str(r#"{ "background": "black" }"#),
        Err(HighlightError::Json(_))
    ));
}

// ============================================================================
// Semantic tokens
// ============================================================================

#[test]
fn test_semantic_tokens_context() {
    let source = "on spawn";
    let result = generate_semantic_tokens(&tokens(source), source);

    assert_eq!(
        result,
        vec![
            SemanticToken {
                delta_line: 0,
                delta_start: 0,
                length: 2,
                token_type: token_types::KEYWORD,
                token_modifiers_bitset: 0,
            },
            SemanticToken {
                delta_line: 0,
                delta_start: 3,
                length: 5,
                token_type: token_types::FUNCTION,
                token_modifiers_bitset: token_modifiers::DECLARATION,
            },
        ]
    );
}

#[test]
fn test_semantic_tokens_split_multiline() {
    let source = "/* a\nb */";
    let result = generate_semantic_tokens(&tokens(source), source);
    let triples: Vec<(u32, u32, u32)> = result
        .iter()
        .map(|t| (t.delta_line, t.delta_start, t.length))
        .collect();

    assert_eq!(triples, vec![(0, 0, 2), (0, 2, 2), (1, 0, 2), (0, 2, 2)]);
    assert!(result.iter().all(|t| t.token_type == token_types::COMMENT));
}

#[test]
fn test_semantic_tokens_skip_punctuation() {
    let source = "has hp: 1";
    let result = generate_semantic_tokens(&tokens(source), source);
    assert_eq!(result.len(), 3);
    assert_eq!(result[1].token_type, token_types::PROPERTY);
    assert_eq!(result[2].token_type, token_types::NUMBER);
    assert_eq!(result[2].delta_start, 4);
}

#[test]
fn test_semantic_tokens_utf16_columns() {
    let source = "\"😀\" x";
    let result = generate_semantic_tokens(&tokens(source), source);
    assert_eq!(result[0].length, 4);
    assert_eq!(result[1].delta_start, 5);
}

#[test]
fn test_encode_flattens() {
    let source = "Zombie";
    let data = encode(&generate_semantic_tokens(&tokens(source), source));
    assert_eq!(data, vec![0, 0, 6, token_types::CLASS, 0]);
}
