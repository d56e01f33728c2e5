//! Rule tables for the Morphyn lexer.
//! Morphyn 词法分析器的规则表。
//!
//! Each mode owns an ordered slice of rules. A rule's matcher looks at the
//! input remaining at the cursor and returns the byte length it consumes.
//! The lexer applies the first rule that matches, never the longest.
//! 每个模式拥有一个有序的规则切片。规则的匹配器查看光标处剩余的输入，
//! 并返回其消耗的字节长度。词法分析器应用第一个匹配的规则，而不是最长的。

use crate::lexer::Mode;
use crate::token::Category;

/// Statement keywords. / 语句关键字。
pub const KEYWORDS: &[&str] = &["entity", "on", "has", "check", "import", "emit"];

/// Constant keywords. / 常量关键字。
pub const CONSTANTS: &[&str] = &["true", "false", "self", "pool", "null"];

/// Built-in function names. / 内置函数名。
pub const BUILTINS: &[&str] = &[
    "log",
    "count",
    "add",
    "remove_at",
    "at",
    "each",
    "push",
    "pop",
    "shift",
    "remove",
    "insert",
    "swap",
    "clear",
    "unity",
];

/// Operators spelled as words. / 以单词拼写的运算符。
pub const WORD_OPERATORS: &[&str] = &["and", "or", "not"];

/// What the most recent non-whitespace token allows the next identifier to be.
/// 最近一个非空白 token 允许下一个标识符成为什么。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Context {
    #[default]
    None,
    /// After the `on` keyword: event handler name. / `on` 关键字之后：事件处理器名。
    AfterOn,
    /// After the `has` keyword: field name. / `has` 关键字之后：字段名。
    AfterHas,
}

/// Mode change applied after a rule matches.
/// 规则匹配后应用的模式变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Stay,
    Push(Mode),
    Pop,
}

/// State visible to matchers at the cursor.
/// 光标处对匹配器可见的状态。
pub(crate) struct Scan<'a> {
    /// Input from the cursor to the end. / 从光标到末尾的输入。
    pub rest: &'a str,
    /// Character just before the cursor. / 光标前的字符。
    pub prev: Option<char>,
    pub context: Context,
}

pub(crate) struct Rule {
    pub name: &'static str,
    pub category: Category,
    pub transition: Transition,
    pub matcher: fn(&Scan<'_>) -> Option<usize>,
}

const fn rule(
    name: &'static str,
    category: Category,
    matcher: fn(&Scan<'_>) -> Option<usize>,
) -> Rule {
    Rule {
        name,
        category,
        transition: Transition::Stay,
        matcher,
    }
}

const fn rule_with(
    name: &'static str,
    category: Category,
    transition: Transition,
    matcher: fn(&Scan<'_>) -> Option<usize>,
) -> Rule {
    Rule {
        name,
        category,
        transition,
        matcher,
    }
}

/// Rules of the default mode, in priority order.
/// 默认模式的规则，按优先级排序。
pub(crate) static DEFAULT_RULES: &[Rule] = &[
    rule("line-comment", Category::Comment, line_comment),
    rule_with(
        "block-comment-open",
        Category::Comment,
        Transition::Push(Mode::BlockComment),
        block_comment_open,
    ),
    rule("string", Category::String, string),
    rule("keyword", Category::Keyword, keyword),
    rule("constant", Category::Constant, constant),
    rule("builtin", Category::Builtin, builtin),
    rule("arrow", Category::Operator, arrow),
    rule("comparison", Category::ComparisonOperator, comparison),
    rule("arithmetic", Category::ArithmeticOperator, arithmetic),
    rule("word-operator", Category::WordOperator, word_operator),
    rule("number", Category::Number, number),
    rule("class-name", Category::ClassName, class_name),
    rule("function-name", Category::FunctionName, function_name),
    rule("field-name", Category::FieldName, field_name),
    rule("identifier", Category::Identifier, identifier),
    rule("punctuation", Category::Punctuation, punctuation),
    rule("whitespace", Category::Whitespace, whitespace),
];

/// Rules inside `/* ... */`.
/// `/* ... */` 内部的规则。
pub(crate) static BLOCK_COMMENT_RULES: &[Rule] = &[
    rule("comment-text", Category::Comment, comment_text),
    rule_with(
        "block-comment-close",
        Category::Comment,
        Transition::Pop,
        block_comment_close,
    ),
    rule("comment-delimiter", Category::Comment, comment_delimiter),
];

pub(crate) fn rules_for(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Default => DEFAULT_RULES,
        Mode::BlockComment => BLOCK_COMMENT_RULES,
    }
}

/// Word characters for boundary checks: Unicode alphanumerics and `_`.
/// 用于边界检查的单词字符：Unicode 字母数字和 `_`。
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace characters: Unicode `White_Space` plus the ASCII information
/// separators U+001C..=U+001F, which Python's `\s` also accepts.
/// 空白字符：Unicode `White_Space` 加上 ASCII 信息分隔符 U+001C..=U+001F。
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True if `text[..at]` and `text[at..]` meet at a word boundary.
/// 如果 `text[..at]` 与 `text[at..]` 在单词边界相接，则为 true。
fn is_boundary(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back().is_some_and(is_word_char);
    let after = text[at..].chars().next().is_some_and(is_word_char);
    before != after
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of `[a-z_][A-Za-z0-9_]*` at the start of `text`.
/// `text` 开头 `[a-z_][A-Za-z0-9_]*` 的长度。
fn lower_ident_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b'a'..=b'z' | b'_') => {
            Some(1 + bytes[1..].iter().take_while(|&&b| is_ident_continue(b)).count())
        }
        _ => None,
    }
}

/// First word of `words` found at the start of `text` followed by a word boundary.
/// `words` 中第一个出现在 `text` 开头且后跟单词边界的单词。
fn whole_word(text: &str, words: &[&str]) -> Option<usize> {
    words
        .iter()
        .find(|w| text.starts_with(**w) && is_boundary(text, w.len()))
        .map(|w| w.len())
}

fn line_comment(scan: &Scan<'_>) -> Option<usize> {
    if scan.rest.starts_with('#') || scan.rest.starts_with("//") {
        Some(scan.rest.find('\n').unwrap_or(scan.rest.len()))
    } else {
        None
    }
}

fn block_comment_open(scan: &Scan<'_>) -> Option<usize> {
    scan.rest.starts_with("/*").then_some(2)
}

/// `"` up to the next `"`; no escapes, newlines allowed.
/// `"` 直到下一个 `"`；无转义，允许换行。
fn string(scan: &Scan<'_>) -> Option<usize> {
    let body = scan.rest.strip_prefix('"')?;
    body.find('"').map(|close| close + 2)
}

fn keyword(scan: &Scan<'_>) -> Option<usize> {
    whole_word(scan.rest, KEYWORDS)
}

fn constant(scan: &Scan<'_>) -> Option<usize> {
    whole_word(scan.rest, CONSTANTS)
}

fn builtin(scan: &Scan<'_>) -> Option<usize> {
    whole_word(scan.rest, BUILTINS)
}

fn arrow(scan: &Scan<'_>) -> Option<usize> {
    scan.rest.starts_with("->").then_some(2)
}

fn comparison(scan: &Scan<'_>) -> Option<usize> {
    if ["==", "!=", "<=", ">="]
        .iter()
        .any(|op| scan.rest.starts_with(op))
    {
        Some(2)
    } else if scan.rest.starts_with(['<', '>']) {
        Some(1)
    } else {
        None
    }
}

fn arithmetic(scan: &Scan<'_>) -> Option<usize> {
    scan.rest
        .starts_with(['+', '-', '*', '/', '%'])
        .then_some(1)
}

/// Word operators carry no boundary check: `order` starts with `or`.
/// 单词运算符不检查边界：`order` 以 `or` 开头。
fn word_operator(scan: &Scan<'_>) -> Option<usize> {
    WORD_OPERATORS
        .iter()
        .find(|op| scan.rest.starts_with(**op))
        .map(|op| op.len())
}

/// Digits with an optional `.` and fraction, bounded by word boundaries.
/// 带可选 `.` 和小数部分的数字，两端为单词边界。
///
/// With a dot present the candidates are tried longest first: full
/// fraction, then the bare `digits.`, then `digits` alone. Each must end on
/// a boundary, so `1.5x` yields `1.` and `1.` at the end of input yields `1`.
/// 存在小数点时，候选项按从长到短尝试：完整小数、`digits.`、仅 `digits`。
/// 每个候选都必须以边界结束。
fn number(scan: &Scan<'_>) -> Option<usize> {
    if scan.prev.is_some_and(is_word_char) {
        return None;
    }

    let text = scan.rest;
    let int_len = text.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    if text[int_len..].starts_with('.') {
        let frac_len = text[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let full = int_len + 1 + frac_len;
        if frac_len > 0 && is_boundary(text, full) {
            return Some(full);
        }
        if is_boundary(text, int_len + 1) {
            return Some(int_len + 1);
        }
    }

    is_boundary(text, int_len).then_some(int_len)
}

/// `[A-Z][A-Za-z0-9_]*` as a whole word.
/// 整词形式的 `[A-Z][A-Za-z0-9_]*`。
fn class_name(scan: &Scan<'_>) -> Option<usize> {
    if scan.prev.is_some_and(is_word_char) {
        return None;
    }

    let bytes = scan.rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_uppercase) {
        return None;
    }
    let len = 1 + bytes[1..].iter().take_while(|&&b| is_ident_continue(b)).count();
    is_boundary(scan.rest, len).then_some(len)
}

fn function_name(scan: &Scan<'_>) -> Option<usize> {
    if scan.context == Context::AfterOn {
        lower_ident_len(scan.rest)
    } else {
        None
    }
}

fn field_name(scan: &Scan<'_>) -> Option<usize> {
    if scan.context == Context::AfterHas {
        lower_ident_len(scan.rest)
    } else {
        None
    }
}

fn identifier(scan: &Scan<'_>) -> Option<usize> {
    lower_ident_len(scan.rest)
}

fn punctuation(scan: &Scan<'_>) -> Option<usize> {
    scan.rest
        .starts_with(['{', '}', '(', ')', '[', ']', ':', ',', '.'])
        .then_some(1)
}

fn whitespace(scan: &Scan<'_>) -> Option<usize> {
    let len: usize = scan
        .rest
        .chars()
        .take_while(|&c| is_space(c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

fn comment_text(scan: &Scan<'_>) -> Option<usize> {
    let len = scan
        .rest
        .find(['*', '/'])
        .unwrap_or(scan.rest.len());
    (len > 0).then_some(len)
}

fn block_comment_close(scan: &Scan<'_>) -> Option<usize> {
    scan.rest.starts_with("*/").then_some(2)
}

fn comment_delimiter(scan: &Scan<'_>) -> Option<usize> {
    scan.rest.starts_with(['*', '/']).then_some(1)
}
