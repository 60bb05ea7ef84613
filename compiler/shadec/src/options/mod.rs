//! Command-line options shared by every file command.

use shade_diagnostic::emitter::ColorMode;
use shade_diagnostic::DEFAULT_CONTEXT_LINES;
use thiserror::Error;

/// Options accepted after the command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Lines of context shown above and below a reported position.
    pub context_lines: usize,
    pub color: ColorMode,
    /// `rebuild` only: report a mismatch instead of printing the output.
    pub check: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            context_lines: DEFAULT_CONTEXT_LINES,
            color: ColorMode::Auto,
            check: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },
}

/// Split `args` into options and positional arguments.
///
/// Options may appear anywhere; `--` ends option parsing.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), OptionsError> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            positional.extend(args.by_ref().cloned());
            break;
        }
        if let Some(value) = arg.strip_prefix("--context-lines=") {
            options.context_lines = value.parse().map_err(|_| OptionsError::InvalidValue {
                option: "--context-lines",
                value: value.to_string(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| OptionsError::InvalidValue {
                option: "--color",
                value: value.to_string(),
            })?;
        } else if arg == "--check" {
            options.check = true;
        } else if arg.starts_with("--") {
            return Err(OptionsError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}
