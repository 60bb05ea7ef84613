//! Command handlers for the `shade` CLI.
//!
//! Every file command is a pure function from source text to a
//! [`FileReport`]; [`run_files`] loads the files in parallel, then prints
//! the reports in argument order and emits their diagnostics.

use std::io::IsTerminal;

use rayon::prelude::*;
use shade_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use shade_diagnostic::{Diagnostic, ErrorCode};
use shade_lexer::TokenKind;
use shade_lexer_core::SourceBuffer;

use crate::Options;

mod explain;
mod find;
mod lex;
mod rebuild;
mod split;

pub use explain::explain_error;
pub use find::find_source;
pub use lex::lex_source;
pub use rebuild::rebuild_source;
pub use split::split_source;

/// Output of one command over one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Text for stdout.
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Failures with no error code (I/O, `--check` mismatches).
    pub errors: Vec<String>,
}

impl FileReport {
    pub fn failed(message: String) -> Self {
        FileReport {
            errors: vec![message],
            ..FileReport::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// The keyword hook used by the CLI: every identifier stays an identifier.
pub(crate) fn no_keywords(_: &str) -> TokenKind {
    TokenKind::Undefined
}

/// Warning for a NUL byte inside the text, if there is one.
///
/// Warnings never fail a file.
pub(crate) fn terminator_warning(buffer: &SourceBuffer, options: &Options) -> Option<Diagnostic> {
    let pos = buffer.terminator()?;
    Some(
        Diagnostic::warning(ErrorCode::E0005)
            .with_message("source contains a NUL byte")
            .located(buffer.as_str(), pos, options.context_lines)
            .with_note("the NUL byte is kept as an undefined token"),
    )
}

/// Read a source file, describing the failure in a user-facing message.
pub fn load_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Run `command` over every path and print the results.
///
/// Returns `true` if every file succeeded.
pub fn run_files<F>(paths: &[String], options: &Options, command: F) -> bool
where
    F: Fn(&str, &str, &Options) -> FileReport + Sync,
{
    let reports: Vec<FileReport> = paths
        .par_iter()
        .map(|path| match load_file(path) {
            Ok(source) => command(path, &source, options),
            Err(message) => FileReport::failed(message),
        })
        .collect();

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), options.color, is_tty);

    let mut error_count = 0;
    let mut warning_count = 0;
    for report in &reports {
        print!("{}", report.output);
        for message in &report.errors {
            eprintln!("error: {message}");
        }
        emitter.emit_all(&report.diagnostics);

        error_count += report.errors.len();
        for diagnostic in &report.diagnostics {
            if diagnostic.is_error() {
                error_count += 1;
            } else {
                warning_count += 1;
            }
        }
    }
    emitter.emit_summary(error_count, warning_count);
    emitter.flush();

    tracing::debug!(files = paths.len(), error_count, "command finished");
    reports.iter().all(|r| !r.has_errors())
}
