//! Line index for byte offset to line/column conversion.
//! 字节偏移量到行/列转换的行索引。

use crate::BytePos;

/// Start offsets of every line in a source text.
/// 源文本中每一行的起始偏移量。
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line.
/// 仅按 `\n` 分行；其前面的 `\r` 仍属于该行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start. Always contains at least `0`.
    /// 每行起始的字节偏移量，至少包含 `0`。
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Build the index for `source`.
    /// 为 `source` 构建索引。
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Zero-based line containing `offset`; offsets past the end map to the last line.
    fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset.min(self.len)) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Zero-based (line, UTF-16 column) of `pos`, as editors count columns.
    /// `pos` 的（行，UTF-16 列），与编辑器的列计数方式一致。
    ///
    /// Both values saturate at `u32::MAX`.
    /// 两个值都在 `u32::MAX` 处饱和。
    pub fn position_utf16(&self, source: &str, pos: BytePos) -> (u32, u32) {
        let offset = usize::from(pos).min(self.len);
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let col = source
            .get(start..offset)
            .map_or(0, |text| text.encode_utf16().count());
        (saturate(line), saturate(col))
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
