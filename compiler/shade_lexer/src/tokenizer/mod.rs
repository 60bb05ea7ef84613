//! C-like tokenizer.
//!
//! Drives [`split_string`] and turns every literal run into one token.
//! Multi-character operators are not scanned ahead; they are formed by
//! looking back at the token just emitted and widening it when the new
//! character completes a compound operator (`+` then `=` gives `+=`).
//! A merge only happens when nothing separates the two characters.

use std::ops::ControlFlow;

use shade_diagnostic::{render_context, Diagnostic, ErrorCode, DEFAULT_CONTEXT_LINES};
use shade_lexer_core::{
    skip_float_number, skip_identifier, skip_line, split_string, ScanError, ScanErrorKind,
    SourceCursor, Span,
};
use thiserror::Error;

use crate::{Token, TokenKind, TokenList};

/// Tokenization failed; no partial token list survives.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unable to tokenize source")]
pub struct TokenizeError {
    #[source]
    cause: ScanError,
    context: String,
}

impl TokenizeError {
    pub fn new(cause: ScanError, context: String) -> Self {
        TokenizeError { cause, context }
    }

    /// The scanning failure that stopped tokenization.
    pub fn cause(&self) -> ScanError {
        self.cause
    }

    pub fn pos(&self) -> u32 {
        self.cause.pos
    }

    /// Context block rendered around the failure position.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The cause followed by the tokenization failure itself.
    pub fn diagnostics(&self, source: &str, context_lines: usize) -> [Diagnostic; 2] {
        let (code, note) = match self.cause.kind {
            ScanErrorKind::UnterminatedComment => {
                (ErrorCode::E0001, "add `*/` to close the comment")
            }
            ScanErrorKind::UnterminatedString => {
                (ErrorCode::E0002, "add `\"` to close the string")
            }
        };
        [
            Diagnostic::error(code)
                .with_message(self.cause.kind.to_string())
                .located(source, self.cause.pos, context_lines)
                .with_note(note),
            Diagnostic::error(ErrorCode::E0004).with_message(self.to_string()),
        ]
    }
}

/// Tokenize from `start` to the end of its range.
///
/// `classify` is consulted for every identifier-shaped literal; returning
/// [`TokenKind::Undefined`] keeps it an [`TokenKind::Identifier`].
///
/// Whitespace and comments after the last token are kept in a trailing
/// `Undefined` token with an empty literal, so rebuilding the list always
/// reproduces the scanned text exactly.
#[tracing::instrument(level = "debug", skip_all, fields(start = start.pos(), end = start.end()))]
pub fn tokenize<'a, C, F>(start: C, mut classify: F) -> Result<TokenList<'a>, TokenizeError>
where
    C: SourceCursor<'a>,
    F: FnMut(&'a str) -> TokenKind,
{
    let source = start.source();
    let mut tokens = TokenList::new(source, start.pos());

    let result = split_string(start, |delimiter_start, pos: &mut C| {
        next_token(&mut tokens, delimiter_start.pos(), pos, &mut classify)
    });

    match result {
        Ok(()) => {
            tracing::debug!(tokens = tokens.len() - 1, "tokenized");
            Ok(tokens)
        }
        Err(cause) => {
            let context = render_context(source, cause.pos, DEFAULT_CONTEXT_LINES);
            tracing::error!(pos = cause.pos, "{}\n{context}", cause.kind);
            Err(TokenizeError::new(cause, context))
        }
    }
}

/// Consume one literal run and record it.
fn next_token<'a, C, F>(
    tokens: &mut TokenList<'a>,
    delimiter_start: u32,
    pos: &mut C,
    classify: &mut F,
) -> Result<ControlFlow<()>, ScanError>
where
    C: SourceCursor<'a>,
    F: FnMut(&'a str) -> TokenKind,
{
    let literal_start = pos.pos();
    let delimiter = Span::new(delimiter_start, literal_start);

    if pos.is_end() {
        // Trailing whitespace or comments.
        tokens.push(Token::new(
            TokenKind::Undefined,
            delimiter,
            Span::point(literal_start),
        ));
        return Ok(ControlFlow::Break(()));
    }

    let adjacent = delimiter.is_empty();
    let kind = match pos.current() {
        b'#' => {
            skip_line(pos, false);
            TokenKind::PreprocessorDirective
        }

        b'=' => {
            if adjacent {
                if let Some(merged) = merge_with_equals(tokens) {
                    pos.advance();
                    tokens.extend_last(merged, pos.pos());
                    return Ok(continue_unless_end(pos));
                }
            }
            single(pos, TokenKind::Assignment)
        }

        b'|' | b'&' => {
            if merge_double(tokens, adjacent, pos, TokenKind::LogicOp) {
                return Ok(continue_unless_end(pos));
            }
            single(pos, TokenKind::BitwiseOp)
        }

        b'<' | b'>' => {
            if merge_double(tokens, adjacent, pos, TokenKind::BitwiseOp) {
                return Ok(continue_unless_end(pos));
            }
            single(pos, TokenKind::ComparisonOp)
        }

        b'+' | b'-' => {
            if merge_double(tokens, adjacent, pos, TokenKind::IncDecOp) {
                return Ok(continue_unless_end(pos));
            }
            single(pos, TokenKind::MathOp)
        }

        b':' => {
            if merge_double(tokens, adjacent, pos, TokenKind::DoubleColon) {
                return Ok(continue_unless_end(pos));
            }
            single(pos, TokenKind::Colon)
        }

        b'~' | b'^' => single(pos, TokenKind::BitwiseOp),
        b'*' | b'/' | b'%' => single(pos, TokenKind::MathOp),
        b'!' => single(pos, TokenKind::LogicOp),
        b',' => single(pos, TokenKind::Comma),
        b';' => single(pos, TokenKind::Semicolon),
        b'?' => single(pos, TokenKind::QuestionMark),
        b'(' => single(pos, TokenKind::OpenParen),
        b')' => single(pos, TokenKind::ClosingParen),
        b'{' => single(pos, TokenKind::OpenBrace),
        b'}' => single(pos, TokenKind::ClosingBrace),
        b'[' => single(pos, TokenKind::OpenSquareBracket),
        b']' => single(pos, TokenKind::ClosingSquareBracket),

        b'"' => {
            let quote = pos.pos();
            pos.advance();
            let content_start = pos.pos();
            pos.eat_until_quote();
            if pos.current() != b'"' {
                return Err(ScanError::new(ScanErrorKind::UnterminatedString, quote));
            }
            let literal = Span::new(content_start, pos.pos());
            pos.advance();
            record(tokens, TokenKind::StringConstant, delimiter, literal);
            return Ok(continue_unless_end(pos));
        }

        _ => literal_kind(pos, literal_start, classify),
    };

    record(tokens, kind, delimiter, Span::new(literal_start, pos.pos()));
    Ok(continue_unless_end(pos))
}

/// Identifier, then number, then one character of anything else.
fn literal_kind<'a, C, F>(pos: &mut C, literal_start: u32, classify: &mut F) -> TokenKind
where
    C: SourceCursor<'a>,
    F: FnMut(&'a str) -> TokenKind,
{
    skip_identifier(pos);
    if pos.pos() != literal_start {
        return match classify(pos.slice_from(literal_start)) {
            TokenKind::Undefined => TokenKind::Identifier,
            kind => kind,
        };
    }

    skip_float_number(pos);
    if pos.pos() != literal_start {
        return TokenKind::NumericConstant;
    }

    pos.advance_char();
    TokenKind::Undefined
}

#[inline]
fn single<'a, C: SourceCursor<'a>>(pos: &mut C, kind: TokenKind) -> TokenKind {
    pos.advance();
    kind
}

#[inline]
fn continue_unless_end<'a, C: SourceCursor<'a>>(pos: &C) -> ControlFlow<()> {
    if pos.is_end() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

fn record(tokens: &mut TokenList<'_>, kind: TokenKind, delimiter: Span, literal: Span) {
    tracing::trace!(%kind, %delimiter, %literal, "token");
    tokens.push(Token::new(kind, delimiter, literal));
}

/// The previous literal as an operator prefix, if it can be one.
fn operator_prefix<'src>(tokens: &TokenList<'src>) -> Option<&'src str> {
    let last = tokens.last();
    if last.kind == TokenKind::StringConstant {
        return None;
    }
    Some(tokens.literal(last))
}

/// Kind of `<prev>=` when the previous token is a compound prefix.
fn merge_with_equals(tokens: &TokenList<'_>) -> Option<TokenKind> {
    match operator_prefix(tokens)? {
        "+" | "-" | "*" | "/" | "%" | "<<" | ">>" | "&" | "|" | "^" => {
            Some(TokenKind::Assignment)
        }
        "<" | ">" | "=" | "!" => Some(TokenKind::ComparisonOp),
        _ => None,
    }
}

/// Merge a doubled character (`&&`, `<<`, `++`, `::`) into the previous token.
fn merge_double<'a, C: SourceCursor<'a>>(
    tokens: &mut TokenList<'a>,
    adjacent: bool,
    pos: &mut C,
    merged: TokenKind,
) -> bool {
    if !adjacent {
        return false;
    }
    let current = pos.current();
    let doubles = operator_prefix(tokens).is_some_and(|prev| prev.as_bytes() == [current]);
    if doubles {
        pos.advance();
        tokens.extend_last(merged, pos.pos());
    }
    doubles
}
