//! Cursor abstraction over a borrowed source text.
//!
//! Every scanner in this crate is generic over [`SourceCursor`]: a `Copy`
//! position that can be dereferenced, advanced, and compared against its
//! end. Copying a cursor is how scanners snapshot a position and restore
//! it when a match is abandoned.
//!
//! Two implementations are provided:
//! - [`Cursor`] reads from a sentinel-terminated [`SourceBuffer`] and never
//!   bounds-checks `current()` or `peek()`.
//! - [`SliceCursor`] walks any borrowed `&str`, optionally restricted to a
//!   sub-range, without copying it.
//!
//! Positions are absolute `u32` byte offsets into [`SourceCursor::source`]
//! in both cases.

use crate::SourceBuffer;

/// A position within a borrowed source text.
///
/// # Contract
///
/// - `current()` returns `0x00` when `pos() >= end()`.
/// - `advance()` is only called when `!is_end()`.
/// - `end() <= source().len()` and lies on a character boundary.
pub trait SourceCursor<'a>: Copy {
    /// The full text positions index into.
    fn source(&self) -> &'a str;

    /// Current byte offset.
    fn pos(&self) -> u32;

    /// Exclusive end bound of the scannable range.
    fn end(&self) -> u32;

    /// Byte at the current position, or `0x00` at the end.
    fn current(&self) -> u8;

    /// Byte one position ahead, or `0x00` past the end.
    fn peek(&self) -> u8;

    /// Advance by one byte.
    fn advance(&mut self);

    /// Returns `true` at the structural end of the range.
    #[inline]
    fn is_end(&self) -> bool {
        self.pos() >= self.end()
    }

    /// Returns `true` at the structural end or on an embedded `0x00`.
    #[inline]
    fn at_terminator(&self) -> bool {
        self.is_end() || self.current() == 0
    }

    /// Advance past one full UTF-8 character, never beyond the end.
    fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        for _ in 0..width {
            if self.is_end() {
                break;
            }
            self.advance();
        }
    }

    /// Text between two offsets of the same source.
    fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source()[start as usize..end as usize]
    }

    /// Text from `start` up to the current position.
    fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos())
    }

    /// Advance to the next `\r`, `\n`, `0x00`, or the end.
    fn eat_until_line_end(&mut self) {
        while !self.is_end() && !matches!(self.current(), b'\n' | b'\r' | 0) {
            self.advance();
        }
    }

    /// Advance to the next `"`, `0x00`, or the end.
    fn eat_until_quote(&mut self) {
        while !self.is_end() && !matches!(self.current(), b'"' | 0) {
            self.advance();
        }
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Continuation and invalid leading bytes count as one byte.
#[inline]
pub(crate) fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Cursor over a sentinel-terminated [`SourceBuffer`].
///
/// Created via [`SourceBuffer::cursor()`].
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every padding byte after it is `0x00`,
/// with at least one padding byte. `current()` and `peek()` therefore read
/// without a bounds comparison for any `pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated bytes (source + sentinel + padding).
    buf: &'a [u8],
    /// Source content only.
    text: &'a str,
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buffer: &'a SourceBuffer) -> Self {
        let buf = buffer.as_sentinel_bytes();
        let source_len = buffer.len();
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel and peek padding must be within buffer bounds"
        );
        Self {
            buf,
            text: buffer.as_str(),
            pos: 0,
            source_len,
        }
    }
}

impl<'a> SourceCursor<'a> for Cursor<'a> {
    #[inline]
    fn source(&self) -> &'a str {
        self.text
    }

    #[inline]
    fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    fn end(&self) -> u32 {
        self.source_len
    }

    #[inline]
    fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// SIMD-accelerated search for the line end.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    fn eat_until_line_end(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr3(b'\n', b'\r', 0, remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// SIMD-accelerated search for the closing quote.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    fn eat_until_quote(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(b'"', 0, remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }
}

/// Cursor over a borrowed `&str`, optionally restricted to a sub-range.
///
/// Positions stay absolute offsets into the whole text, so spans produced
/// while scanning a sub-range can be used directly against the full source.
#[derive(Clone, Copy, Debug)]
pub struct SliceCursor<'a> {
    text: &'a str,
    pos: u32,
    end: u32,
}

impl<'a> SliceCursor<'a> {
    /// Cursor over the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        Self::range(text, 0, u32::MAX)
    }

    /// Cursor over `text[start..end]`.
    ///
    /// Both bounds are clamped to the text length and then moved back to
    /// the nearest character boundary, so a bound inside a multi-byte
    /// character takes in the whole character at `start` and drops it at
    /// `end`. `start` is clamped to `end`.
    pub fn range(text: &'a str, start: u32, end: u32) -> Self {
        let end = floor_char_boundary(text, end as usize);
        let start = floor_char_boundary(text, (start as usize).min(end));
        Self {
            text,
            pos: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }
}

/// Largest character boundary of `text` at or below `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len()).min(u32::MAX as usize);
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

impl<'a> SourceCursor<'a> for SliceCursor<'a> {
    #[inline]
    fn source(&self) -> &'a str {
        self.text
    }

    #[inline]
    fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    fn current(&self) -> u8 {
        if self.pos < self.end {
            self.text.as_bytes()[self.pos as usize]
        } else {
            0
        }
    }

    #[inline]
    fn peek(&self) -> u8 {
        if self.pos + 1 < self.end {
            self.text.as_bytes()[self.pos as usize + 1]
        } else {
            0
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}
