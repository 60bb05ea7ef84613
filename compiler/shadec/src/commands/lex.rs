//! The `lex` command: print the token stream.

use std::fmt::Write;

use shade_lexer::tokenize;
use shade_lexer_core::SourceBuffer;

use super::{no_keywords, terminator_warning, FileReport};
use crate::Options;

/// Tokenize `source` and list every token after the sentinel.
pub fn lex_source(path: &str, source: &str, options: &Options) -> FileReport {
    let buffer = SourceBuffer::new(source);
    let mut diagnostics: Vec<_> = terminator_warning(&buffer, options).into_iter().collect();
    let tokens = match tokenize(buffer.cursor(), no_keywords) {
        Ok(tokens) => tokens,
        Err(err) => {
            diagnostics.extend(err.diagnostics(source, options.context_lines));
            return FileReport {
                diagnostics,
                ..FileReport::default()
            };
        }
    };

    let real = tokens.real_tokens();
    let mut output = format!("Tokens for '{path}' ({} tokens):\n", real.len());
    for token in real {
        let _ = writeln!(
            output,
            "  {:?} {:?} @ {}",
            token.kind,
            tokens.literal(token),
            token.literal
        );
    }
    FileReport {
        output,
        diagnostics,
        errors: Vec::new(),
    }
}
