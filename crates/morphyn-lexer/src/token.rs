//! Token definitions for Morphyn.

use morphyn_common::Span;
use std::fmt;

/// A classified slice of source text.
///
/// Tokens borrow their text from the source, so concatenating the `text` of
/// every token in order gives back the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub category: Category,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(category: Category, text: &'src str, span: Span) -> Self {
        Self {
            category,
            text,
            span,
        }
    }

    /// Returns true if no rule matched this text and it was consumed as a
    /// single fallback character.
    ///
    /// Rule-matched identifiers always start with `[a-z_]`, so an identifier
    /// token starting with anything else came from the fallback.
    pub fn is_fallback(&self) -> bool {
        self.category == Category::Identifier
            && !self
                .text
                .starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
    }
}

/// The highlighting category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    // Words
    Keyword,
    Constant,
    Builtin,

    // Operators
    Operator,           // ->
    ComparisonOperator, // == != <= >= < >
    ArithmeticOperator, // + - * / %
    WordOperator,       // and or not

    // Literals
    Number,
    String,

    // Names
    ClassName,
    FunctionName,
    FieldName,
    Identifier,

    // Everything else
    Punctuation,
    Comment,
    Whitespace,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 16] = [
        Category::Keyword,
        Category::Constant,
        Category::Builtin,
        Category::Operator,
        Category::ComparisonOperator,
        Category::ArithmeticOperator,
        Category::WordOperator,
        Category::Number,
        Category::String,
        Category::ClassName,
        Category::FunctionName,
        Category::FieldName,
        Category::Identifier,
        Category::Punctuation,
        Category::Comment,
        Category::Whitespace,
    ];

    /// Display name, e.g. `ComparisonOperator`.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Constant => "Constant",
            Category::Builtin => "Builtin",
            Category::Operator => "Operator",
            Category::ComparisonOperator => "ComparisonOperator",
            Category::ArithmeticOperator => "ArithmeticOperator",
            Category::WordOperator => "WordOperator",
            Category::Number => "Number",
            Category::String => "String",
            Category::ClassName => "ClassName",
            Category::FunctionName => "FunctionName",
            Category::FieldName => "FieldName",
            Category::Identifier => "Identifier",
            Category::Punctuation => "Punctuation",
            Category::Comment => "Comment",
            Category::Whitespace => "Whitespace",
        }
    }

    /// Configuration key, e.g. `comparison-operator`.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Constant => "constant",
            Category::Builtin => "builtin",
            Category::Operator => "operator",
            Category::ComparisonOperator => "comparison-operator",
            Category::ArithmeticOperator => "arithmetic-operator",
            Category::WordOperator => "word-operator",
            Category::Number => "number",
            Category::String => "string",
            Category::ClassName => "class-name",
            Category::FunctionName => "function-name",
            Category::FieldName => "field-name",
            Category::Identifier => "identifier",
            Category::Punctuation => "punctuation",
            Category::Comment => "comment",
            Category::Whitespace => "whitespace",
        }
    }

    /// Look up a category by its configuration key or display name.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key || c.name() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
