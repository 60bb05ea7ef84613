//! Low-level scanning layer for C-like source text.
//!
//! Everything here is a free function over a [`SourceCursor`]: character
//! classifiers, cursor scanners (lines, comments, delimiter runs,
//! identifiers, numeric literals) and the chunk splitter that the token
//! model in `shade_lexer` is built on.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer / &str
//!     │
//!     ▼
//! Cursor / SliceCursor ──► scan::* ──► split_string(handler)
//! ```
//!
//! Two end-of-input signals exist and both are honoured at every step:
//! the structural end of the cursor range, and an embedded `0x00`
//! terminator inside the text.

pub mod char_class;
mod cursor;
pub mod scan;
mod source_buffer;
mod span;
mod split;

pub use cursor::{Cursor, SliceCursor, SourceCursor};
pub use scan::{
    skip_comment, skip_delimiters, skip_delimiters_and_comments, skip_float_number,
    skip_identifier, skip_line, CommentSkip, ScanError, ScanErrorKind,
};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use split::split_string;
