//! The `split` command: show the raw (gap, literal) chunks.
//!
//! Literals here are whitespace-separated runs, not tokens, which makes
//! it easy to see exactly what the splitter treats as a gap.

use std::fmt::Write;
use std::ops::ControlFlow;

use shade_diagnostic::{Diagnostic, ErrorCode};
use shade_lexer_core::char_class::is_delimiter;
use shade_lexer_core::{split_string, ScanError, ScanErrorKind, SourceBuffer, SourceCursor};

use super::{terminator_warning, FileReport};
use crate::Options;

/// List every chunk of `source` as `gap | literal`.
pub fn split_source(path: &str, source: &str, options: &Options) -> FileReport {
    let buffer = SourceBuffer::new(source);
    let mut diagnostics: Vec<_> = terminator_warning(&buffer, options).into_iter().collect();
    let mut output = format!("Chunks for '{path}':\n");
    let result = split_string(buffer.cursor(), |gap_start, pos| {
        let gap = pos.slice_from(gap_start.pos());
        let literal_start = pos.pos();
        skip_word(pos);
        let _ = writeln!(output, "  {gap:?} | {:?}", pos.slice_from(literal_start));
        Ok::<_, ScanError>(ControlFlow::Continue(()))
    });

    if let Err(err) = result {
        let code = match err.kind {
            ScanErrorKind::UnterminatedComment => ErrorCode::E0001,
            ScanErrorKind::UnterminatedString => ErrorCode::E0002,
        };
        diagnostics.push(
            Diagnostic::error(code)
                .with_message(err.kind.to_string())
                .located(source, err.pos, options.context_lines),
        );
    }
    FileReport {
        output,
        diagnostics,
        errors: Vec::new(),
    }
}

/// Advance over one non-delimiter run, stopping before a comment opener.
fn skip_word<'a, C: SourceCursor<'a>>(pos: &mut C) {
    // Always take at least one character so the splitter makes progress.
    if !pos.is_end() {
        pos.advance_char();
    }
    while !pos.is_end() && !is_delimiter(pos.current()) {
        if pos.current() == b'/' && matches!(pos.peek(), b'/' | b'*') {
            break;
        }
        pos.advance_char();
    }
}
