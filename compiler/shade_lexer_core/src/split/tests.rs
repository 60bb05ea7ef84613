use std::ops::ControlFlow;

use pretty_assertions::assert_eq;

use super::*;
use crate::char_class::is_delimiter;
use crate::{ScanErrorKind, SliceCursor, SourceBuffer};

/// Helper: split `source`, taking each literal run up to the next
/// delimiter, and collect `(gap, literal)` text pairs.
fn chunks(source: &str) -> Result<Vec<(String, String)>, ScanError> {
    let mut out = Vec::new();
    split_string(SliceCursor::new(source), |delim_start, pos| {
        let gap = pos.slice(delim_start.pos(), pos.pos()).to_string();
        let literal_start = pos.pos();
        while !pos.is_end() && !is_delimiter(pos.current()) {
            pos.advance();
        }
        out.push((gap, pos.slice_from(literal_start).to_string()));
        Ok::<_, ScanError>(ControlFlow::Continue(()))
    })?;
    Ok(out)
}

fn pair(gap: &str, literal: &str) -> (String, String) {
    (gap.to_string(), literal.to_string())
}

#[test]
fn splits_on_whitespace_and_comments() {
    let result = chunks("a  /* x */ b\n// y\nc").unwrap();
    assert_eq!(
        result,
        vec![
            pair("", "a"),
            pair("  /* x */ ", "b"),
            pair("\n// y\n", "c"),
        ]
    );
}

#[test]
fn trailing_gap_reaches_handler_at_end() {
    let result = chunks("a   ").unwrap();
    assert_eq!(result, vec![pair("", "a"), pair("   ", "")]);
}

#[test]
fn empty_input_never_calls_handler() {
    let result = chunks("").unwrap();
    assert!(result.is_empty());
}

#[test]
fn gap_concatenation_reproduces_source() {
    let source = " int  x; /* c */ return\r\n";
    let rebuilt: String = chunks(source)
        .unwrap()
        .into_iter()
        .map(|(gap, literal)| gap + &literal)
        .collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn handler_break_stops_early() {
    let mut seen = 0;
    split_string(SliceCursor::new("a b c d"), |_, pos| {
        pos.advance();
        seen += 1;
        let flow = if seen == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        };
        Ok::<_, ScanError>(flow)
    })
    .unwrap();
    assert_eq!(seen, 2);
}

#[test]
fn unterminated_comment_aborts() {
    let err = chunks("a /* b").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedComment);
    assert_eq!(err.pos, 2);
}

#[test]
fn handler_error_propagates() {
    let result = split_string(SliceCursor::new("x"), |_, _| {
        Err::<ControlFlow<()>, _>(ScanError::new(ScanErrorKind::UnterminatedString, 0))
    });
    assert_eq!(
        result,
        Err(ScanError::new(ScanErrorKind::UnterminatedString, 0))
    );
}

#[test]
fn works_over_sentinel_cursor() {
    let buf = SourceBuffer::new("x y");
    let mut literals = Vec::new();
    split_string(buf.cursor(), |_, pos| {
        let start = pos.pos();
        pos.advance();
        literals.push(pos.slice_from(start));
        Ok::<_, ScanError>(ControlFlow::Continue(()))
    })
    .unwrap();
    assert_eq!(literals, vec!["x", "y"]);
}

#[test]
fn every_iteration_advances() {
    // One byte per handler call over input containing every printable byte.
    let source: String = (0x21u8..0x7F).map(char::from).filter(|&c| c != '/').collect();
    let mut calls = 0;
    split_string(SliceCursor::new(&source), |_, pos| {
        pos.advance();
        calls += 1;
        Ok::<_, ScanError>(ControlFlow::Continue(()))
    })
    .unwrap();
    assert_eq!(calls, source.len());
}
