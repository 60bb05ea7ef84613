//! Append-only token storage.
//!
//! A [`TokenList`] borrows the text it was built from, so its spans can
//! never be read against a buffer that has gone away. Index 0 always holds
//! an empty sentinel token; "the previous token" is therefore defined for
//! every real token, including the first.

use std::ops::Index;

use shade_lexer_core::Span;

use crate::{Token, TokenKind};

/// Ordered tokens of one source text, starting with the sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> TokenList<'src> {
    /// An empty list over `source` whose sentinel sits at `start`.
    pub fn new(source: &'src str, start: u32) -> Self {
        TokenList {
            source,
            tokens: vec![Token::new(
                TokenKind::Undefined,
                Span::point(start),
                Span::point(start),
            )],
        }
    }

    /// The text the spans index into.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Number of tokens, sentinel included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if only the sentinel is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens after the sentinel.
    pub fn real_tokens(&self) -> &[Token] {
        self.tokens.get(1..).unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Mutable access for re-tagging passes run before rebuilding.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    /// Re-tag the token at `index`. Returns `false` if out of range.
    pub fn set_kind(&mut self, index: usize, kind: TokenKind) -> bool {
        match self.tokens.get_mut(index) {
            Some(token) => {
                token.kind = kind;
                true
            }
            None => false,
        }
    }

    /// The most recently appended token (the sentinel if none).
    #[inline]
    pub fn last(&self) -> &Token {
        // The sentinel is never removed.
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn literal(&self, token: &Token) -> &'src str {
        token.literal_text(self.source)
    }

    #[inline]
    pub fn delimiter(&self, token: &Token) -> &'src str {
        token.delimiter_text(self.source)
    }

    #[inline]
    pub fn compare_literal(&self, token: &Token, text: &str) -> bool {
        token.compare_literal(self.source, text)
    }

    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(
            token.delimiter.start >= self.last().literal.end,
            "token at {} starts before the previous token ends",
            token.delimiter
        );
        self.tokens.push(token);
    }

    /// Widen the last token's literal to `end` and re-tag it.
    ///
    /// Used to merge an adjacent operator character into the previous
    /// token; the sentinel is never a merge target.
    pub(crate) fn extend_last(&mut self, kind: TokenKind, end: u32) {
        let last_index = self.tokens.len() - 1;
        debug_assert!(last_index > 0, "cannot extend the sentinel token");
        let last = &mut self.tokens[last_index];
        debug_assert!(end >= last.literal.end, "literal can only grow");
        last.kind = kind;
        last.literal = last.literal.extend_to(end);
    }
}

impl Index<usize> for TokenList<'_> {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList<'_> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
