//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so a [`Cursor`] can read its current and next byte without comparing
//! against the end first. The total size is rounded up to the next 64-byte
//! boundary, leaving at least one padding byte after the sentinel for
//! `peek()` at end of input.
//!
//! # Embedded terminators
//!
//! Shader sources handed over from C APIs sometimes carry a `0x00` before
//! their nominal end. The scanners treat such a byte as an implicit end of
//! input; the buffer records where the first one sits so a driver can
//! warn that the text after it is not what the author meant to send.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned text: `[source..., '\0' sentinel, '\0' padding...]`.
    ///
    /// Kept as a `String` (NUL is valid UTF-8) so slicing never needs
    /// unchecked conversions.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Offset of the first interior `0x00`, if any.
    terminator: Option<u32>,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`:
    /// every position in this workspace is a `u32` offset.
    pub fn new(source: &str) -> Self {
        let mut source_len = source.len().min(u32::MAX as usize - 1);
        while !source.is_char_boundary(source_len) {
            source_len -= 1;
        }
        let source = &source[..source_len];

        // Round up to the next 64-byte boundary, keeping room for the
        // sentinel plus one byte of `peek()` padding.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        let terminator = memchr::memchr(0, source.as_bytes()).and_then(|p| u32::try_from(p).ok());

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            terminator,
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub(crate) fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Offset of the first embedded `0x00` terminator, if the source has one.
    ///
    /// Line, comment and numeric scanners stop there; the tokenizer keeps
    /// the byte itself as an undefined token.
    pub fn terminator(&self) -> Option<u32> {
        self.terminator
    }
}

#[cfg(test)]
mod tests;
