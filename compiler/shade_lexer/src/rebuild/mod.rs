//! Lossless source reconstruction.

use crate::{Token, TokenKind, TokenList};

/// Concatenate every token's delimiter and literal text.
///
/// String constants get their quotes back. Any token re-tagged as a
/// string constant is quoted too.
pub fn build_source(source: &str, tokens: &[Token]) -> String {
    let capacity = tokens
        .iter()
        .map(|t| t.delimiter.len() as usize + t.literal.len() as usize + 2)
        .sum();
    let mut output = String::with_capacity(capacity);
    for token in tokens {
        output.push_str(token.delimiter_text(source));
        if token.kind == TokenKind::StringConstant {
            output.push('"');
            output.push_str(token.literal_text(source));
            output.push('"');
        } else {
            output.push_str(token.literal_text(source));
        }
    }
    output
}

impl TokenList<'_> {
    /// Rebuild the tokenized text, including the edits made through
    /// [`TokenList::get_mut`] and [`TokenList::set_kind`].
    pub fn build_source(&self) -> String {
        build_source(self.source(), self.as_slice())
    }
}

#[cfg(test)]
mod tests;
