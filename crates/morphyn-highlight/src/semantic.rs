//! Semantic token encoding for editor highlighting.
//! 用于编辑器高亮的语义 token 编码。
//!
//! Converts lexer tokens to the delta-encoded form used by the Language
//! Server Protocol, so an editor integration can forward them as-is.
//! 将词法 token 转换为语言服务器协议使用的增量编码形式，编辑器集成可直接转发。

use morphyn_common::LineIndex;
use morphyn_lexer::{Category, Token};
use serde::Serialize;

/// Token type indices (must match `TOKEN_TYPES`).
/// Token 类型索引（必须与 `TOKEN_TYPES` 匹配）。
pub mod token_types {
    /// Keyword. / 关键字。
    pub const KEYWORD: u32 = 0;
    /// Variable. / 变量。
    pub const VARIABLE: u32 = 1;
    /// Function. / 函数。
    pub const FUNCTION: u32 = 2;
    /// Class. / 类。
    pub const CLASS: u32 = 3;
    /// String. / 字符串。
    pub const STRING: u32 = 4;
    /// Number. / 数字。
    pub const NUMBER: u32 = 5;
    /// Comment. / 注释。
    pub const COMMENT: u32 = 6;
    /// Operator. / 运算符。
    pub const OPERATOR: u32 = 7;
    /// Property. / 属性。
    pub const PROPERTY: u32 = 8;
}

/// Token modifier bit flags (must match `TOKEN_MODIFIERS`).
/// Token 修饰符位标志（必须与 `TOKEN_MODIFIERS` 匹配）。
pub mod token_modifiers {
    /// Declaration. / 声明。
    pub const DECLARATION: u32 = 1 << 0;
    /// Readonly. / 只读。
    pub const READONLY: u32 = 1 << 1;
    /// Provided by the runtime. / 由运行时提供。
    pub const DEFAULT_LIBRARY: u32 = 1 << 2;
}

/// Legend of token type names, indexed by `token_types`.
/// Token 类型名称图例，按 `token_types` 索引。
pub const TOKEN_TYPES: &[&str] = &[
    "keyword", "variable", "function", "class", "string", "number", "comment", "operator",
    "property",
];

/// Legend of modifier names, by bit position.
/// 修饰符名称图例，按位位置排列。
pub const TOKEN_MODIFIERS: &[&str] = &["declaration", "readonly", "defaultLibrary"];

/// One delta-encoded semantic token.
/// 一个增量编码的语义 token。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticToken {
    pub delta_line: u32,
    pub delta_start: u32,
    /// Length in UTF-16 code units. / UTF-16 码元长度。
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers_bitset: u32,
}

/// Map a category to (token type, modifiers); `None` for tokens editors
/// do not color.
/// 将类别映射为（token 类型，修饰符）；编辑器不着色的 token 返回 `None`。
pub fn classify(category: Category) -> Option<(u32, u32)> {
    let classified = match category {
        Category::Keyword => (token_types::KEYWORD, 0),
        Category::Constant => (token_types::KEYWORD, token_modifiers::READONLY),
        Category::Builtin => (token_types::FUNCTION, token_modifiers::DEFAULT_LIBRARY),
        Category::Operator
        | Category::ComparisonOperator
        | Category::ArithmeticOperator
        | Category::WordOperator => (token_types::OPERATOR, 0),
        Category::Number => (token_types::NUMBER, 0),
        Category::String => (token_types::STRING, 0),
        Category::ClassName => (token_types::CLASS, 0),
        // Event handler names follow `on`, field names follow `has`
        // 事件处理器名跟在 `on` 之后，字段名跟在 `has` 之后
        Category::FunctionName => (token_types::FUNCTION, token_modifiers::DECLARATION),
        Category::FieldName => (token_types::PROPERTY, token_modifiers::DECLARATION),
        Category::Identifier => (token_types::VARIABLE, 0),
        Category::Comment => (token_types::COMMENT, 0),
        Category::Punctuation | Category::Whitespace => return None,
    };
    Some(classified)
}

/// Generate semantic tokens from lexer tokens.
/// 从词法 token 生成语义 token。
///
/// Tokens spanning several lines (block comments, strings) are split into
/// one semantic token per line, since editors expect single-line entries.
/// 跨越多行的 token（块注释、字符串）被拆分为每行一个语义 token，
/// 因为编辑器期望单行条目。
pub fn generate_semantic_tokens(tokens: &[Token<'_>], source: &str) -> Vec<SemanticToken> {
    let index = LineIndex::new(source);
    let mut result = Vec::new();
    let mut prev_line = 0u32;
    let mut prev_col = 0u32;

    for token in tokens {
        let Some((token_type, modifiers)) = classify(token.category) else {
            continue;
        };

        let mut offset: usize = token.span.start.into();
        for piece in token.text.split_inclusive('\n') {
            let content = piece.trim_end_matches(['\n', '\r']);
            let length = u32::try_from(content.encode_utf16().count()).unwrap_or(u32::MAX);

            if length > 0 {
                let (line, col) = index.position_utf16(source, offset.into());
                let delta_line = line.saturating_sub(prev_line);
                let delta_start = if delta_line == 0 {
                    col.saturating_sub(prev_col)
                } else {
                    col
                };

                result.push(SemanticToken {
                    delta_line,
                    delta_start,
                    length,
                    token_type,
                    token_modifiers_bitset: modifiers,
                });

                prev_line = line;
                prev_col = col;
            }

            offset += piece.len();
        }
    }

    result
}

/// Flatten semantic tokens into the `u32` array sent over the wire.
/// 将语义 token 展平为通过网络发送的 `u32` 数组。
pub fn encode(tokens: &[SemanticToken]) -> Vec<u32> {
    tokens
        .iter()
        .flat_map(|t| {
            [
                t.delta_line,
                t.delta_start,
                t.length,
                t.token_type,
                t.token_modifiers_bitset,
            ]
        })
        .collect()
}
