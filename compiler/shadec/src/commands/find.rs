//! The `find` command: locate a function definition by name.

use shade_diagnostic::line_col;
use shade_lexer::tokenize;
use shade_lexer_core::SourceBuffer;

use super::{no_keywords, terminator_warning, FileReport};
use crate::Options;

/// Report where `name` is defined in `source`.
///
/// Bracket imbalance is reported as a diagnostic and treated as not found.
pub fn find_source(name: &str, path: &str, source: &str, options: &Options) -> FileReport {
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

    let output = match tokens.locate_function(name) {
        Ok(Some(index)) => {
            let location = line_col(source, tokens[index].literal.start);
            format!("{path}:{location}: {name}\n")
        }
        Ok(None) => format!("{path}: '{name}' not found\n"),
        Err(err) => {
            diagnostics.push(err.diagnostic(source, options.context_lines));
            format!("{path}: '{name}' not found\n")
        }
    };
    FileReport {
        output,
        diagnostics,
        errors: Vec::new(),
    }
}
