//! The Morphyn lexer.
//! Morphyn 词法分析器。

use crate::rules::{self, Context, Scan, Transition};
use crate::token::{Category, Token};
use morphyn_common::Span;
use std::iter::FusedIterator;
use tracing::trace;

/// Mode for lexer state machine.
/// 词法分析器状态机的模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Top-level text - 顶层文本
    Default,
    /// Inside `/* ... */` - 在 `/* ... */` 内部
    BlockComment,
}

/// The Morphyn lexer.
/// Morphyn 词法分析器。
///
/// A lazy iterator over the tokens of a source text. Every byte of the input
/// ends up in exactly one token; unmatched characters are emitted one at a
/// time as identifiers, so iteration never fails.
/// 源文本 token 的惰性迭代器。输入的每个字节恰好属于一个 token；
/// 未匹配的字符逐个作为标识符输出，因此迭代从不失败。
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// Source being scanned - 正在扫描的源码
    source: &'src str,
    /// Current byte position in source - 当前在源码中的字节位置
    pos: usize,
    /// Stack of lexer modes, never empty
    /// 词法分析器模式栈，永不为空
    mode_stack: Vec<Mode>,
    /// Context left by the last non-whitespace token
    /// 最后一个非空白 token 留下的上下文
    context: Context,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            mode_stack: vec![Mode::Default],
            context: Context::None,
        }
    }

    /// Get the current lexer mode.
    /// 获取当前词法分析器模式。
    pub fn mode(&self) -> Mode {
        *self.mode_stack.last().unwrap_or(&Mode::Default)
    }

    /// Returns true once all input has been consumed.
    /// 所有输入被消耗后返回 true。
    pub fn is_finished(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Push a new mode onto the stack.
    /// 将新模式压入栈中。
    fn push_mode(&mut self, mode: Mode) {
        trace!(pos = self.pos, ?mode, "push lexer mode");
        self.mode_stack.push(mode);
    }

    /// Pop the current mode from the stack.
    /// 从栈中弹出当前模式。
    fn pop_mode(&mut self) {
        if self.mode_stack.len() > 1 {
            let mode = self.mode_stack.pop();
            trace!(pos = self.pos, ?mode, "pop lexer mode");
        }
    }

    /// Update the identifier context after emitting a token.
    /// 输出 token 后更新标识符上下文。
    fn update_context(&mut self, token: &Token<'_>) {
        self.context = match (token.category, token.text) {
            (Category::Keyword, "on") => Context::AfterOn,
            (Category::Keyword, "has") => Context::AfterHas,
            // Whitespace keeps whatever came before it
            // 空白保留之前的上下文
            (Category::Whitespace, _) => self.context,
            _ => Context::None,
        };
    }

    /// Match the next token at the cursor.
    /// 在光标处匹配下一个 token。
    fn next_token(&mut self) -> Option<Token<'src>> {
        if self.is_finished() {
            return None;
        }
        let source = self.source;
        let start = self.pos;
        let rest = &source[start..];
        let scan = Scan {
            rest,
            prev: source[..start].chars().next_back(),
            context: self.context,
        };

        let matched = rules::rules_for(self.mode())
            .iter()
            .find_map(|rule| {
                (rule.matcher)(&scan)
                    .filter(|&len| len > 0)
                    .map(|len| (rule, len))
            });

        let token = match matched {
            Some((rule, len)) => {
                trace!(rule = rule.name, start, len, "rule matched");
                self.pos = start + len;
                match rule.transition {
                    Transition::Stay => {}
                    Transition::Push(mode) => self.push_mode(mode),
                    Transition::Pop => self.pop_mode(),
                }
                Token::new(
                    rule.category,
                    &source[start..self.pos],
                    Span::from_usize(start, self.pos),
                )
            }
            None => {
                // No rule matched: consume a single character
                // 没有规则匹配：消耗单个字符
                let len = rest.chars().next().map_or(1, char::len_utf8);
                self.pos = start + len;
                Token::new(
                    Category::Identifier,
                    &source[start..self.pos],
                    Span::from_usize(start, self.pos),
                )
            }
        };

        self.update_context(&token);
        Some(token)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len().saturating_sub(self.pos);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Lexer<'_> {}
