//! Function definition locator.
//!
//! Finds a function by name at bracket depth zero using a purely lexical
//! heuristic: `<identifier> <name> (` where the leading identifier stands
//! in for a return type. Calls inside bodies sit at a positive depth and
//! are skipped; a call at the top level preceded by a non-identifier
//! (a cast, an operator) is not a match either.

use shade_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

use crate::{Token, TokenKind, TokenList};

/// Bracket structure that makes the depth count meaningless.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LocateError {
    /// A closing bracket with no opening bracket before it.
    #[error("brackets are not correctly balanced")]
    UnbalancedBrackets {
        /// Offset of the offending closing bracket.
        pos: u32,
        index: usize,
    },
    /// An opening bracket that is never closed.
    #[error("bracket is never closed")]
    UnclosedBracket {
        /// Offset of the outermost unclosed opening bracket.
        pos: u32,
        index: usize,
    },
}

impl LocateError {
    pub fn pos(self) -> u32 {
        match self {
            LocateError::UnbalancedBrackets { pos, .. } | LocateError::UnclosedBracket { pos, .. } => {
                pos
            }
        }
    }

    /// Index of the offending token.
    pub fn index(self) -> usize {
        match self {
            LocateError::UnbalancedBrackets { index, .. }
            | LocateError::UnclosedBracket { index, .. } => index,
        }
    }

    pub fn diagnostic(self, source: &str, context_lines: usize) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0003)
            .with_message(self.to_string())
            .located(source, self.pos(), context_lines)
    }
}

/// Index of the first definition-like occurrence of `name` in `tokens`.
///
/// The whole range is checked for bracket balance, so a match is only
/// reported when the depth it was found at can be trusted. An empty name
/// never matches.
pub fn locate_function(
    source: &str,
    tokens: &[Token],
    name: &str,
) -> Result<Option<usize>, LocateError> {
    if name.is_empty() {
        tracing::warn!("function lookup with an empty name");
        return Ok(None);
    }

    let mut depth: u32 = 0;
    let mut outermost_open = 0;
    let mut found = None;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind.is_open_bracket() {
            if depth == 0 {
                outermost_open = index;
            }
            depth += 1;
        } else if token.kind.is_closing_bracket() {
            if depth == 0 {
                return Err(LocateError::UnbalancedBrackets {
                    pos: token.literal.start,
                    index,
                });
            }
            depth -= 1;
        } else if found.is_none()
            && depth == 0
            && token.kind == TokenKind::Identifier
            && token.compare_literal(source, name)
            && is_definition_site(tokens, index)
        {
            found = Some(index);
        }
    }

    if depth > 0 {
        return Err(LocateError::UnclosedBracket {
            pos: tokens[outermost_open].literal.start,
            index: outermost_open,
        });
    }

    tracing::debug!(name, index = ?found, "function lookup");
    Ok(found)
}

/// Next token is `(` and the previous one is an identifier.
fn is_definition_site(tokens: &[Token], index: usize) -> bool {
    let next_is_paren = tokens
        .get(index + 1)
        .is_some_and(|t| t.kind == TokenKind::OpenParen);
    let prev_is_identifier = index
        .checked_sub(1)
        .and_then(|prev| tokens.get(prev))
        .is_some_and(|t| t.kind == TokenKind::Identifier);
    next_is_paren && prev_is_identifier
}

/// [`locate_function`] that reports bracket errors and degrades to `None`.
pub fn find_function(source: &str, tokens: &[Token], name: &str) -> Option<usize> {
    match locate_function(source, tokens, name) {
        Ok(found) => found,
        Err(err) => {
            tracing::error!(pos = err.pos(), name, "{err}");
            None
        }
    }
}

impl TokenList<'_> {
    /// See [`find_function`].
    pub fn find_function(&self, name: &str) -> Option<usize> {
        find_function(self.source(), self.as_slice(), name)
    }

    /// See [`locate_function`].
    pub fn locate_function(&self, name: &str) -> Result<Option<usize>, LocateError> {
        locate_function(self.source(), self.as_slice(), name)
    }
}

#[cfg(test)]
mod tests;
