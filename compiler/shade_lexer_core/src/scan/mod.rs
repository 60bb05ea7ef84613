//! Cursor scanners.
//!
//! Each scanner takes a mutable cursor, advances it in place, and reports
//! whether the structural end of input was reached. A scanner that does
//! not recognise its construct leaves the cursor where it was.
//!
//! Numeric literals follow a strict C-style grammar; malformed prefixes
//! (`01`, `1e3`, `.5`) are not errors, the scanner simply stops early and
//! the caller falls back to single-character consumption.

use thiserror::Error;

use crate::char_class::{is_delimiter, is_digit, is_ident_continue, is_ident_start, is_new_line};
use crate::SourceCursor;

/// What went wrong while scanning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanErrorKind {
    /// `/*` with no matching `*/` before the end of input.
    #[error("unterminated multi-line comment")]
    UnterminatedComment,
    /// `"` with no matching `"` before the end of input.
    #[error("unable to find matching closing quote")]
    UnterminatedString,
}

/// A scanning failure anchored at a source offset.
///
/// Terminal for the operation in progress: no partial result survives it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} (at byte {pos})")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// Offset of the construct's opening delimiter.
    pub pos: u32,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, pos: u32) -> Self {
        ScanError { kind, pos }
    }
}

/// Outcome of [`skip_comment`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CommentSkip {
    /// A comment was consumed and input remains.
    Skipped,
    /// The cursor is not at a comment; it was left unchanged.
    NotComment,
    /// Input is exhausted, either already or after consuming the comment.
    Exhausted,
}

/// Skip to the end of the current line.
///
/// Stops at `\r`, `\n`, an embedded terminator, or the end. With
/// `go_to_next_line`, the newline is consumed as well, `\r\n` counting as
/// one line ending.
pub fn skip_line<'a, C: SourceCursor<'a>>(pos: &mut C, go_to_next_line: bool) -> bool {
    pos.eat_until_line_end();
    if go_to_next_line && !pos.is_end() && is_new_line(pos.current()) {
        let first = pos.current();
        pos.advance();
        if first == b'\r' && !pos.is_end() && pos.current() == b'\n' {
            pos.advance();
        }
    }
    pos.is_end()
}

/// Skip a `//` or `/* */` comment starting at the cursor.
///
/// A `//` comment is consumed through its newline. An unclosed `/*` is an
/// error anchored at the opening `/`.
pub fn skip_comment<'a, C: SourceCursor<'a>>(pos: &mut C) -> Result<CommentSkip, ScanError> {
    if pos.at_terminator() {
        return Ok(CommentSkip::Exhausted);
    }
    if pos.current() != b'/' {
        return Ok(CommentSkip::NotComment);
    }

    let mut next = *pos;
    next.advance();
    if next.at_terminator() {
        return Ok(CommentSkip::NotComment);
    }

    match next.current() {
        b'/' => {
            next.advance();
            *pos = next;
            skip_line(pos, true);
            Ok(settled(pos))
        }
        b'*' => {
            next.advance();
            while !next.at_terminator() {
                if next.current() == b'*' {
                    next.advance();
                    if next.at_terminator() {
                        break;
                    }
                    if next.current() == b'/' {
                        next.advance();
                        *pos = next;
                        return Ok(settled(pos));
                    }
                } else {
                    next.advance();
                }
            }
            Err(ScanError::new(ScanErrorKind::UnterminatedComment, pos.pos()))
        }
        _ => Ok(CommentSkip::NotComment),
    }
}

fn settled<'a, C: SourceCursor<'a>>(pos: &C) -> CommentSkip {
    if pos.at_terminator() {
        CommentSkip::Exhausted
    } else {
        CommentSkip::Skipped
    }
}

/// Skip a run of delimiter bytes (spaces, tabs, newlines).
pub fn skip_delimiters<'a, C: SourceCursor<'a>>(pos: &mut C) -> bool {
    while !pos.is_end() && is_delimiter(pos.current()) {
        pos.advance();
    }
    pos.is_end()
}

/// Skip any interleaving of delimiter runs and comments.
///
/// Stops once an iteration consumes neither, so
/// `/* c1 */   // c2\n   x` is one gap ending at `x`.
pub fn skip_delimiters_and_comments<'a, C: SourceCursor<'a>>(
    pos: &mut C,
) -> Result<bool, ScanError> {
    loop {
        let before_delimiters = pos.pos();
        skip_delimiters(pos);
        let delimiter_skipped = pos.pos() != before_delimiters;

        let before_comment = pos.pos();
        skip_comment(pos)?;
        let comment_skipped = pos.pos() != before_comment;

        if pos.is_end() || !(delimiter_skipped || comment_skipped) {
            break;
        }
    }
    Ok(pos.is_end())
}

/// Skip one identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Leaves the cursor unchanged and returns `false` if the current byte
/// cannot start an identifier.
pub fn skip_identifier<'a, C: SourceCursor<'a>>(pos: &mut C) -> bool {
    if pos.is_end() {
        return true;
    }
    if !is_ident_start(pos.current()) {
        return false;
    }
    pos.advance();
    while !pos.is_end() && is_ident_continue(pos.current()) {
        pos.advance();
    }
    pos.is_end()
}

/// Skip one C-style numeric literal.
///
/// Grammar: `[+-]? int ('.' digits*)? ([eE] [+-] digits+)? [fF]?`, where
/// `int` is `0` or a non-zero-led digit run, the suffix requires a decimal
/// part or an exponent, and the exponent requires an integer part and an
/// explicit sign. The cursor advances over the longest valid prefix:
///
/// | input     | consumed  |
/// |-----------|-----------|
/// | `01`      | `0`       |
/// | `0.`      | `0.`      |
/// | `.5`      | (nothing) |
/// | `1e3`     | `1`       |
/// | `1.2e-3f` | `1.2e-3f` |
///
/// Zero advancement means "not a number".
pub fn skip_float_number<'a, C: SourceCursor<'a>>(pos: &mut C) -> bool {
    let start = pos.pos();
    let mut c = *pos;

    if c.at_terminator() {
        return pos.is_end();
    }
    if matches!(c.current(), b'+' | b'-') {
        c.advance();
    }
    if c.at_terminator() {
        return pos.is_end();
    }

    if c.current() == b'0' && is_digit(c.peek()) {
        // Leading zero followed by a digit: only the zero is numeric.
        c.advance();
        *pos = c;
        return pos.is_end();
    }

    let has_integer_part = is_digit(c.current());
    if has_integer_part {
        while !c.is_end() && is_digit(c.current()) {
            c.advance();
            *pos = c;
        }
        if c.at_terminator() {
            return pos.is_end();
        }
    }

    let has_decimal_part = c.current() == b'.';
    if has_decimal_part {
        if !has_integer_part {
            // `.`, `+.`, `.5`, `-.5` are not numbers.
            return pos.is_end();
        }
        c.advance();
        *pos = c;
        while !c.is_end() && is_digit(c.current()) {
            c.advance();
            *pos = c;
        }
        if c.at_terminator() {
            return pos.is_end();
        }
    }

    let has_exponent = matches!(c.current(), b'e' | b'E');
    if has_exponent {
        if !has_integer_part {
            return pos.is_end();
        }
        c.advance();
        if c.is_end() || !matches!(c.current(), b'+' | b'-') {
            return pos.is_end();
        }
        c.advance();
        if c.is_end() || !is_digit(c.current()) {
            return pos.is_end();
        }
        while !c.is_end() && is_digit(c.current()) {
            c.advance();
            *pos = c;
        }
    }

    if (has_decimal_part || has_exponent)
        && !c.is_end()
        && pos.pos() > start
        && matches!(c.current(), b'f' | b'F')
    {
        c.advance();
        *pos = c;
    }
    pos.is_end()
}
