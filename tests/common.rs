//! Integration tests for morphyn-common crate.

use morphyn_common::{BytePos, LineIndex, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_range_and_slice() {
    let span = Span::from_usize(7, 13);
    assert_eq!(span.range(), 7..13);
    assert_eq!(span.slice("entity Zombie {}"), "Zombie");
}

#[test]
fn test_span_slice_out_of_bounds_is_empty() {
    assert_eq!(Span::from_usize(4, 40).slice("entity"), "");
    // Inside the two-byte "é"
    assert_eq!(Span::from_usize(0, 1).slice("é"), "");
}

#[test]
fn test_span_display() {
    assert_eq!(Span::from_usize(3, 8).to_string(), "3..8");
}

#[test]
fn test_byte_pos_saturates() {
    assert_eq!(BytePos::from(usize::MAX), BytePos(u32::MAX));
    assert_eq!(BytePos::from(u32::MAX as usize), BytePos(u32::MAX));
    assert_eq!(BytePos::from(42usize), BytePos(42));

    let span = Span::from_usize(usize::MAX - 1, usize::MAX);
    assert_eq!(span.start, span.end);
    assert_eq!(span.slice("abc"), "");
}

#[test]
fn test_line_index_positions() {
    let source = "entity A {\n  has hp\n}";
    let index = LineIndex::new(source);

    assert_eq!(index.position_utf16(source, BytePos(0)), (0, 0));
    assert_eq!(index.position_utf16(source, BytePos(7)), (0, 7));
    assert_eq!(index.position_utf16(source, BytePos(11)), (1, 0));
    assert_eq!(index.position_utf16(source, BytePos(15)), (1, 4));
    assert_eq!(index.position_utf16(source, BytePos(20)), (2, 0));
}

#[test]
fn test_line_index_newline_belongs_to_its_line() {
    let source = "a\nb";
    let index = LineIndex::new(source);
    assert_eq!(index.position_utf16(source, BytePos(1)), (0, 1));
    assert_eq!(index.position_utf16(source, BytePos(2)), (1, 0));
}

#[test]
fn test_line_index_clamps_past_end() {
    let source = "ab\ncd";
    let index = LineIndex::new(source);
    assert_eq!(index.position_utf16(source, BytePos(99)), (1, 2));
    assert_eq!(index.position_utf16(source, BytePos(u32::MAX)), (1, 2));
}

#[test]
fn test_line_index_empty_source() {
    let index = LineIndex::new("");
    assert_eq!(index.position_utf16("", BytePos(0)), (0, 0));
}

#[test]
fn test_line_index_utf16_columns() {
    // "é" is 2 bytes but 1 UTF-16 unit, "😀" is 4 bytes and 2 units
    let source = "é😀x";
    let index = LineIndex::new(source);
    assert_eq!(index.position_utf16(source, BytePos(6)), (0, 3));
}
