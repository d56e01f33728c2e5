//! Source code span and position tracking.
//! 源码范围和位置跟踪。

use std::fmt;
use std::ops::Range;

/// A byte offset into source text, stored as `u32`.
/// 源码中的字节偏移量，以 `u32` 存储。
///
/// Offsets beyond `u32::MAX` saturate, so inputs of 4 GiB or more get clamped
/// spans near their end instead of wrapping around.
/// 超出 `u32::MAX` 的偏移量会饱和，因此 4 GiB 及以上的输入在末尾附近得到
/// 被截断的范围，而不会回绕。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(u32::try_from(pos).unwrap_or(u32::MAX))
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// A half-open byte range `start..end` in source text.
/// 源码中的半开字节区间 `start..end`。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: BytePos,
    pub end: BytePos,
}

impl Span {
    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// The smallest span covering both `self` and `other`.
    /// 同时覆盖 `self` 和 `other` 的最小范围。
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(&self) -> Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }

    /// The text of `source` under this span, or `""` if the span does not
    /// fall on character boundaries inside it.
    /// 此范围在 `source` 中对应的文本；若范围不在其字符边界内则为 `""`。
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.range()).unwrap_or_default()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
