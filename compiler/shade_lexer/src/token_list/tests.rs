use pretty_assertions::assert_eq;

use super::*;

fn sample() -> TokenList<'static> {
    let mut list = TokenList::new("a +  b", 0);
    list.push(Token::new(
        TokenKind::Identifier,
        Span::point(0),
        Span::new(0, 1),
    ));
    list.push(Token::new(TokenKind::MathOp, Span::new(1, 2), Span::new(2, 3)));
    list
}

#[test]
fn new_list_holds_only_the_sentinel() {
    let list = TokenList::new("abc", 1);
    assert_eq!(list.len(), 1);
    assert!(list.is_empty());
    assert!(list.real_tokens().is_empty());
    assert_eq!(list.last().literal, Span::point(1));
    assert_eq!(list.last().kind, TokenKind::Undefined);
}

#[test]
fn push_and_query_text() {
    let list = sample();
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.literal(&list[1]), "a");
    assert_eq!(list.delimiter(&list[2]), " ");
    assert!(list.compare_literal(list.last(), "+"));
}

#[test]
fn extend_last_widens_and_retags() {
    let mut list = TokenList::new("a+=", 0);
    list.push(Token::new(
        TokenKind::Identifier,
        Span::point(0),
        Span::new(0, 1),
    ));
    list.push(Token::new(TokenKind::MathOp, Span::point(1), Span::new(1, 2)));
    list.extend_last(TokenKind::Assignment, 3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.last().kind, TokenKind::Assignment);
    assert_eq!(list.literal(list.last()), "+=");
    assert_eq!(list.literal(&list[1]), "a");
}

#[test]
fn set_kind_retags_in_place() {
    let mut list = sample();
    assert!(list.set_kind(2, TokenKind::OpenAngleBracket));
    assert_eq!(list[2].kind, TokenKind::OpenAngleBracket);
    assert!(!list.set_kind(10, TokenKind::Comma));
}

#[test]
fn iteration_includes_sentinel() {
    let list = sample();
    let kinds: Vec<TokenKind> = list.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Undefined,
            TokenKind::Identifier,
            TokenKind::MathOp
        ]
    );
    assert_eq!((&list).into_iter().count(), list.as_slice().len());
}
