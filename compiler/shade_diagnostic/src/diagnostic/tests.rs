use pretty_assertions::assert_eq;

use super::*;
use crate::LineCol;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("unable to find matching closing quote")
        .with_note("strings cannot span past the end of input");

    assert!(diag.is_error());
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.pos, None);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn located_renders_context_and_position() {
    let source = "a = 1;\nb = \"x;\nc = 2;";
    let pos = 11;
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("unable to find matching closing quote")
        .located(source, pos, 1);

    assert_eq!(diag.pos, Some(11));
    assert_eq!(diag.location, Some(LineCol { line: 2, column: 5 }));
    assert_eq!(
        diag.context.as_deref(),
        Some("a = 1;\nb = \"x;\n    ^\nc = 2;")
    );
}

#[test]
fn display_includes_code_and_location() {
    let diag = Diagnostic::warning(ErrorCode::E0003)
        .with_message("brackets are not correctly balanced")
        .with_position("x\n)", 2);
    assert_eq!(
        diag.to_string(),
        "warning[E0003]: brackets are not correctly balanced at 2:1"
    );
}

#[test]
fn display_without_location() {
    let diag = Diagnostic::error(ErrorCode::E0004).with_message("unable to tokenize source");
    assert_eq!(diag.to_string(), "error[E0004]: unable to tokenize source");
}
