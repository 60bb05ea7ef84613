//! Chunk splitter.
//!
//! Partitions text into chunks, each a run of delimiters and comments
//! followed by a literal run. The splitter owns the gaps; the caller's
//! handler owns the literals.

use std::ops::ControlFlow;

use crate::scan::skip_delimiters_and_comments;
use crate::{ScanError, SourceCursor};

/// Split text into (gap, literal) chunks starting at `start`.
///
/// For every chunk the handler receives the cursor at the start of the
/// gap and a mutable cursor already past it. The handler must consume at
/// least one literal byte whenever input remains, and returns
/// [`ControlFlow::Break`] to stop early. Splitting ends at the structural
/// end of the cursor range.
///
/// Errors from gap scanning (an unclosed `/*`) and from the handler abort
/// the split and are returned unchanged.
pub fn split_string<'a, C, E, F>(start: C, mut handler: F) -> Result<(), E>
where
    C: SourceCursor<'a>,
    E: From<ScanError>,
    F: FnMut(C, &mut C) -> Result<ControlFlow<()>, E>,
{
    let mut pos = start;
    while !pos.is_end() {
        let delimiter_start = pos;
        skip_delimiters_and_comments(&mut pos)?;
        let literal_start = pos.pos();
        if handler(delimiter_start, &mut pos)?.is_break() {
            break;
        }
        debug_assert!(
            pos.is_end() || pos.pos() != literal_start,
            "position has not been updated by the handler at byte {literal_start}"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
