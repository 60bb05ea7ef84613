//! Core diagnostic type.

use std::fmt;

use crate::{line_col, render_context, ErrorCode, LineCol};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A reportable problem anchored (optionally) to a source offset.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Byte offset the problem is anchored to.
    pub pos: Option<u32>,
    /// Human-readable location of `pos`.
    pub location: Option<LineCol>,
    /// Rendered context block (see [`render_context`]).
    pub context: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            pos: None,
            location: None,
            context: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new(code, Severity::Error)
    }

    /// Create a warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code, Severity::Warning)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Anchor to `pos` in `source`, computing its line and column.
    #[must_use]
    pub fn with_position(mut self, source: &str, pos: u32) -> Self {
        self.pos = Some(pos);
        self.location = Some(line_col(source, pos));
        self
    }

    /// Attach an already rendered context block.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Anchor to `pos` and render `num_lines` of context around it.
    #[must_use]
    pub fn located(self, source: &str, pos: u32, num_lines: usize) -> Self {
        self.with_position(source, pos)
            .with_context(render_context(source, pos, num_lines))
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(location) = self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
