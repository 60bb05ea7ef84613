//! Error codes for tokenizer diagnostics.

use std::fmt;

/// Error codes for all tokenizer diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: scanning and tokenization
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated multi-line comment
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unbalanced brackets while locating a function
    E0003,
    /// Tokenization failed
    E0004,
    /// Embedded NUL byte in the source
    E0005,
}

impl ErrorCode {
    /// Every defined code, in numeric order.
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
    ];

    /// The code as written in diagnostics, e.g. `"E0001"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
        }
    }

    /// One-line explanation, used by `shade explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a `/*` comment is never closed with `*/`",
            ErrorCode::E0002 => "a `\"` string literal is never closed",
            ErrorCode::E0003 => "brackets are not balanced around the searched range",
            ErrorCode::E0004 => "the source could not be split into tokens",
            ErrorCode::E0005 => "the source contains a NUL byte before its end",
        }
    }

    /// Parse a code such as `"E0002"` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
