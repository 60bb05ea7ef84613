//! Byte classification predicates.
//!
//! Pure and total over `u8`. Only ASCII participates in the C-like
//! grammar; every non-ASCII byte classifies as "none of the above".

/// Space or tab.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Carriage return or line feed.
#[inline]
pub fn is_new_line(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

/// Whitespace or newline.
#[inline]
pub fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || is_new_line(byte)
}

/// `;` or `}`: bytes that end a statement.
#[inline]
pub fn is_statement_separator(byte: u8) -> bool {
    matches!(byte, b';' | b'}')
}

/// Decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// First byte of an identifier: ASCII letter or `_`.
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Subsequent identifier byte: ASCII letter, digit, or `_`.
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
