use pretty_assertions::assert_eq;
use shade_lexer_core::SliceCursor;

use super::*;
use crate::tokenize;

fn tokens(source: &str) -> TokenList<'_> {
    tokenize(SliceCursor::new(source), |_| TokenKind::Undefined).unwrap()
}

#[test]
fn finds_definition_not_call_in_body() {
    let list = tokens("int foo(int x) { bar(); } int bar() {}");
    let index = list.find_function("bar").unwrap();
    assert_eq!(index, 14);
    assert_eq!(list.literal(&list[index]), "bar");
    assert_eq!(list.literal(&list[index - 1]), "int");
    assert_eq!(list[index].literal.start, 30);
}

#[test]
fn finds_first_top_level_match() {
    let list = tokens("void f(); void f() {}");
    assert_eq!(list.find_function("f"), Some(2));
}

#[test]
fn requires_identifier_before_name() {
    // Top-level call preceded by a cast.
    let list = tokens("(float) main(); void other() {}");
    assert_eq!(list.find_function("main"), None);
}

#[test]
fn requires_paren_after_name() {
    let list = tokens("int main; int main2() {}");
    assert_eq!(list.find_function("main"), None);
}

#[test]
fn name_at_start_has_no_return_type() {
    let list = tokens("main() {}");
    assert_eq!(list.find_function("main"), None);
}

#[test]
fn re_tagged_angle_brackets_count_as_depth() {
    let mut list = tokens("Tex<int f()> g; int f() {}");
    assert!(list.set_kind(2, TokenKind::OpenAngleBracket));
    assert!(list.set_kind(7, TokenKind::ClosingAngleBracket));
    assert_eq!(list.find_function("f"), Some(11));
}

#[test]
fn unclosed_brackets_are_not_found() {
    let list = tokens("int foo( { ");
    assert_eq!(list.find_function("foo"), None);
    assert_eq!(list.find_function("main"), None);
    assert_eq!(
        list.locate_function("main"),
        Err(LocateError::UnclosedBracket { pos: 7, index: 3 })
    );
}

#[test]
fn stray_closing_bracket_is_reported() {
    let list = tokens("int a; } int foo() {}");
    let err = list.locate_function("foo").unwrap_err();
    assert_eq!(err, LocateError::UnbalancedBrackets { pos: 7, index: 4 });
    assert_eq!(err.to_string(), "brackets are not correctly balanced");
    assert_eq!(list.find_function("foo"), None);
}

#[test]
fn empty_name_is_not_found() {
    let list = tokens("int foo() {}");
    assert_eq!(list.locate_function(""), Ok(None));
}

#[test]
fn locate_over_sub_slice() {
    let list = tokens("int a() {} int b() {}");
    let tail = &list.as_slice()[7..];
    assert_eq!(locate_function(list.source(), tail, "b"), Ok(Some(1)));
}

#[test]
fn diagnostic_points_at_bracket() {
    let source = "int a;\n}";
    let list = tokens(source);
    let err = list.locate_function("a").unwrap_err();
    let diag = err.diagnostic(source, 1);
    assert_eq!(diag.code, ErrorCode::E0003);
    assert_eq!(diag.pos, Some(7));
    assert_eq!(diag.location.map(|l| (l.line, l.column)), Some((2, 1)));
}
