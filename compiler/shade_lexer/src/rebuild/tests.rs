use pretty_assertions::assert_eq;
use shade_lexer_core::{SliceCursor, Span};

use super::*;
use crate::tokenize;

fn round_trip(source: &str) -> String {
    tokenize(SliceCursor::new(source), |_| TokenKind::Undefined)
        .unwrap()
        .build_source()
}

#[test]
fn rebuild_reproduces_source() {
    for source in [
        "",
        "   ",
        "a += 1",
        "#include \"common.fxh\"\r\nfloat4 main() : SV_Target { return 0; }\r\n",
        "s = \"quoted\"; /* trailing */",
        "x<<=2; // done",
        "a @ é\0b",
    ] {
        assert_eq!(round_trip(source), source);
    }
}

#[test]
fn rebuild_sub_range() {
    let source = "xx a + b yy";
    let tokens = tokenize(SliceCursor::range(source, 2, 8), |_| TokenKind::Undefined).unwrap();
    assert_eq!(tokens.build_source(), " a + b");
}

#[test]
fn rebuild_sub_range_starting_mid_character() {
    let source = "éab c";
    let tokens = tokenize(SliceCursor::range(source, 1, 6), |_| TokenKind::Undefined).unwrap();
    assert_eq!(tokens.build_source(), "éab c");
    assert_eq!(tokens[1].kind, TokenKind::Undefined);
    assert_eq!(tokens.literal(&tokens[1]), "é");
}

#[test]
fn retagged_token_is_quoted() {
    let source = "a = b;";
    let mut tokens = tokenize(SliceCursor::new(source), |_| TokenKind::Undefined).unwrap();
    assert!(tokens.set_kind(3, TokenKind::StringConstant));
    assert_eq!(tokens.build_source(), "a = \"b\";");
}

#[test]
fn edited_literal_span_changes_output() {
    let source = "foo(1); bar(2);";
    let mut tokens = tokenize(SliceCursor::new(source), |_| TokenKind::Undefined).unwrap();
    // Point the first call at the second callee's name.
    let bar = tokens[6].literal;
    if let Some(first) = tokens.get_mut(1) {
        first.literal = bar;
    }
    assert_eq!(tokens.build_source(), "bar(1); bar(2);");
}

#[test]
fn free_function_over_slice() {
    let source = "ab";
    let tokens = [
        Token::new(TokenKind::Undefined, Span::point(0), Span::point(0)),
        Token::new(TokenKind::Identifier, Span::point(0), Span::new(0, 2)),
    ];
    assert_eq!(build_source(source, &tokens), "ab");
}
