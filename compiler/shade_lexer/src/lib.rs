//! C-like tokenizer for shader source rewriting.
//!
//! Splits text into classified tokens that keep their preceding
//! whitespace and comments, so the source can be rebuilt byte for byte
//! after individual tokens are edited or re-tagged.
//!
//! # Architecture
//!
//! ```text
//! SourceCursor
//!     │
//!     ▼
//! tokenize(classify) ──► TokenList ──► build_source() ──► String
//!                            │
//!                            └──────► find_function(name) ──► Option<usize>
//! ```
//!
//! There is no grammar here: the tokenizer classifies lexical chunks and
//! leaves keyword recognition to the caller's `classify` hook.

mod locate;
mod rebuild;
mod token;
mod token_list;
mod tokenizer;

pub use locate::{find_function, locate_function, LocateError};
pub use rebuild::build_source;
pub use token::{Token, TokenKind};
pub use token_list::TokenList;
pub use tokenizer::{tokenize, TokenizeError};
