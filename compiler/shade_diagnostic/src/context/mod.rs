//! Source context rendering around an error offset.
//!
//! Produces blocks like:
//!
//! ```text
//! float4 main() : SV_Target
//! {
//!     return "unterminated;
//!            ^
//! }
//! ```
//!
//! `\r\n` counts as a single line boundary; a lone `\r` or `\n` counts as
//! one too. An embedded `0x00` ends the text for rendering purposes.

use std::fmt;

use shade_lexer_core::char_class::is_new_line;
use shade_lexer_core::{skip_line, SliceCursor, SourceCursor};

/// Lines shown above and below the error line by default.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Render `num_lines` lines above and below the line containing `pos`,
/// with a caret under `pos`.
///
/// The error line is printed up to its end, followed by a line of spaces
/// and a `^` at the byte column of `pos`, followed by the lines below.
/// Read-only: neither the source nor the offset are modified.
pub fn render_context(source: &str, pos: u32, num_lines: usize) -> String {
    let bytes = source.as_bytes();
    let pos = (pos as usize).min(bytes.len());

    let mut ctx_start = pos;
    while ctx_start > 0 && !is_new_line(bytes[ctx_start - 1]) {
        ctx_start -= 1;
    }
    let column = pos - ctx_start;

    let line_end = line_end_from(source, pos);

    for _ in 0..num_lines {
        if ctx_start == 0 {
            break;
        }
        if bytes[ctx_start - 1] == b'\n' && ctx_start > 1 && bytes[ctx_start - 2] == b'\r' {
            ctx_start -= 1;
        }
        if ctx_start > 0 {
            ctx_start -= 1;
        }
        while ctx_start > 0 && !is_new_line(bytes[ctx_start - 1]) {
            ctx_start -= 1;
        }
    }

    let mut ctx_end = line_end;
    for _ in 0..num_lines {
        if ctx_end == bytes.len() || bytes[ctx_end] == 0 {
            break;
        }
        if bytes[ctx_end] == b'\r' && ctx_end + 1 < bytes.len() && bytes[ctx_end + 1] == b'\n' {
            ctx_end += 1;
        }
        if ctx_end < bytes.len() {
            ctx_end += 1;
        }
        ctx_end = line_end_from(source, ctx_end);
    }

    let mut out = String::with_capacity(ctx_end - ctx_start + column + 2);
    out.push_str(&String::from_utf8_lossy(&bytes[ctx_start..line_end]));
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(column));
    out.push('^');
    out.push_str(&String::from_utf8_lossy(&bytes[line_end..ctx_end]));
    out
}

/// Offset of the end of the line containing `from`.
fn line_end_from(source: &str, from: usize) -> usize {
    let start = u32::try_from(from).unwrap_or(u32::MAX);
    let mut cursor = SliceCursor::range(source, start, u32::MAX);
    skip_line(&mut cursor, false);
    cursor.pos() as usize
}

/// One-based line and column of a byte offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineCol {
    pub line: u32,
    /// Counted in characters, not bytes.
    pub column: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compute the [`LineCol`] of `pos` in `source`.
///
/// Offsets past the end are clamped to the end.
pub fn line_col(source: &str, pos: u32) -> LineCol {
    let bytes = source.as_bytes();
    let pos = (pos as usize).min(bytes.len());

    let mut line = 1u32;
    let mut line_start = 0usize;
    let mut prev = 0u8;
    for (i, &b) in bytes[..pos].iter().enumerate() {
        if b == b'\r' || (b == b'\n' && prev != b'\r') {
            line += 1;
        }
        if is_new_line(b) {
            line_start = i + 1;
        }
        prev = b;
    }

    let column = String::from_utf8_lossy(&bytes[line_start..pos]).chars().count();
    LineCol {
        line,
        column: u32::try_from(column).unwrap_or(u32::MAX).saturating_add(1),
    }
}

#[cfg(test)]
mod tests;
