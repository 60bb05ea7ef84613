//! Diagnostic system for tokenizer errors.
//!
//! Every failure the tokenizer reports is anchored to a byte offset in the
//! source. This crate turns such an offset into something a person can
//! read:
//! - an [`ErrorCode`] for searchability
//! - a [`LineCol`] location
//! - a context block of surrounding lines with a `^` under the offending
//!   column ([`render_context`])
//! - a [`DiagnosticEmitter`](emitter::DiagnosticEmitter) that prints it all

mod context;
mod diagnostic;
pub mod emitter;
mod error_code;

pub use context::{line_col, render_context, LineCol, DEFAULT_CONTEXT_LINES};
pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
