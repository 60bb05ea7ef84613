//! The `rebuild` command: tokenize and reassemble a file.

use shade_diagnostic::line_col;
use shade_lexer::tokenize;
use shade_lexer_core::SourceBuffer;

use super::{no_keywords, terminator_warning, FileReport};
use crate::Options;

/// Rebuild `source` from its tokens.
///
/// With `--check` nothing is printed; a rebuilt text that differs from
/// the input is reported at the first differing byte.
pub fn rebuild_source(path: &str, source: &str, options: &Options) -> FileReport {
    let buffer = SourceBuffer::new(source);
    let mut diagnostics: Vec<_> = terminator_warning(&buffer, options).into_iter().collect();
    let rebuilt = match tokenize(buffer.cursor(), no_keywords) {
        Ok(tokens) => tokens.build_source(),
        Err(err) => {
            diagnostics.extend(err.diagnostics(source, options.context_lines));
            return FileReport {
                diagnostics,
                ..FileReport::default()
            };
        }
    };

    if !options.check {
        return FileReport {
            output: rebuilt,
            diagnostics,
            errors: Vec::new(),
        };
    }

    let errors = match first_difference(source, &rebuilt) {
        None => Vec::new(),
        Some(pos) => vec![format!(
            "'{path}' does not round-trip: first difference at {}",
            line_col(source, pos)
        )],
    };
    FileReport {
        output: String::new(),
        diagnostics,
        errors,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets fit in u32"
)]
fn first_difference(a: &str, b: &str) -> Option<u32> {
    if a == b {
        return None;
    }
    let common = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    Some(common as u32)
}
