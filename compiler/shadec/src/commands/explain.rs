//! The `explain` command: describe a diagnostic code.

use shade_diagnostic::ErrorCode;

/// Explanation text for `code`, or `None` if the code is unknown.
pub fn explain_error(code: &str) -> Option<String> {
    let code = ErrorCode::parse(code)?;
    Some(format!("{code}: {}\n", code.description()))
}
