use pretty_assertions::assert_eq;

use super::*;

const SOURCE: &str = "line1\nline2\nline3 err\nline4\nline5";

#[test]
fn caret_under_column_single_line() {
    let ctx = render_context("int x = \"abc;", 8, 0);
    assert_eq!(ctx, "int x = \"abc;\n        ^");
}

#[test]
fn one_line_each_side() {
    let pos = SOURCE.find("err").unwrap() as u32;
    let ctx = render_context(SOURCE, pos, 1);
    assert_eq!(ctx, "line2\nline3 err\n      ^\nline4");
}

#[test]
fn two_lines_each_side() {
    let pos = SOURCE.find("err").unwrap() as u32;
    let ctx = render_context(SOURCE, pos, 2);
    assert_eq!(
        ctx,
        "line1\nline2\nline3 err\n      ^\nline4\nline5"
    );
}

#[test]
fn more_lines_than_available() {
    let ctx = render_context("a\nb", 2, 10);
    assert_eq!(ctx, "a\nb\n^");
}

#[test]
fn crlf_is_one_boundary() {
    let source = "top\r\nmid x\r\nbot";
    let pos = source.find('x').unwrap() as u32;
    let ctx = render_context(source, pos, 1);
    assert_eq!(ctx, "top\r\nmid x\n    ^\r\nbot");
}

#[test]
fn error_at_first_byte() {
    let ctx = render_context("/* open", 0, 2);
    assert_eq!(ctx, "/* open\n^");
}

#[test]
fn error_at_end_of_source() {
    let ctx = render_context("abc", 3, 1);
    assert_eq!(ctx, "abc\n   ^");
}

#[test]
fn offset_past_end_is_clamped() {
    let ctx = render_context("ab", 99, 0);
    assert_eq!(ctx, "ab\n  ^");
}

#[test]
fn embedded_terminator_ends_context() {
    let ctx = render_context("a\nb\0hidden\nc", 2, 2);
    assert_eq!(ctx, "a\nb\n^");
}

#[test]
fn source_is_not_modified() {
    let source = String::from("x\ny");
    let before = source.clone();
    let _ = render_context(&source, 2, 1);
    assert_eq!(source, before);
}

// === line_col ===

#[test]
fn line_col_first_byte() {
    assert_eq!(line_col("abc", 0), LineCol { line: 1, column: 1 });
}

#[test]
fn line_col_after_newlines() {
    let pos = SOURCE.find("err").unwrap() as u32;
    assert_eq!(line_col(SOURCE, pos), LineCol { line: 3, column: 7 });
}

#[test]
fn line_col_crlf_counts_once() {
    assert_eq!(line_col("a\r\nb", 3), LineCol { line: 2, column: 1 });
    assert_eq!(line_col("a\rb", 2), LineCol { line: 2, column: 1 });
}

#[test]
fn line_col_counts_characters() {
    assert_eq!(line_col("é=x", 3), LineCol { line: 1, column: 3 });
    assert_eq!(line_col("é=x", 3).to_string(), "1:3");
}
