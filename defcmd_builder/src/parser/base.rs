use thiserror::Error;

use crate::definition::CompileError;
use crate::matcher::{CloseError, MatchError};

/// The error raised by defining or parsing against a [`CommandLine`](crate::CommandLine).
///
/// Every error is terminal for the call which raised it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CmdLineError {
    /// Malformed or over-length input to a public entry point.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name, description, regex, or variable collides with one already defined.
    #[error("Duplicate error: {0}")]
    Duplicate(String),

    /// A definition without a command name, or a required variable without a value.
    #[error("Missing error: {0}")]
    Missing(String),

    /// Invalid definition grammar, or an unrecognized command while parsing.
    #[error("Unsupported error: {message}")]
    Unsupported {
        /// The description of the problem.
        message: String,
        /// The defined command names which closely resemble the unrecognized token, closest first.
        suggestions: Vec<String>,
    },

    /// A consumed value does not match the command's regex.
    #[error("Match error: The value '{value}' does not match the expected pattern '{pattern}'.")]
    Match {
        /// The offending value.
        value: String,
        /// The source of the regex, as defined.
        pattern: String,
    },
}

impl CmdLineError {
    /// The suggested command names; empty for anything but [`CmdLineError::Unsupported`].
    pub fn suggestions(&self) -> &[String] {
        match self {
            CmdLineError::Unsupported { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        CmdLineError::Unsupported {
            message: message.into(),
            suggestions: Vec::default(),
        }
    }
}

impl From<CompileError> for CmdLineError {
    fn from(error: CompileError) -> Self {
        match error {
            CompileError::MissingName => CmdLineError::Missing(error.to_string()),
            CompileError::DuplicateName(_)
            | CompileError::DuplicateCommand(_)
            | CompileError::DuplicateDescription(_)
            | CompileError::DuplicateRegex(_)
            | CompileError::DuplicateVariable(_) => CmdLineError::Duplicate(error.to_string()),
            CompileError::ContainsWhitespace(..)
            | CompileError::Empty(_)
            | CompileError::RequiredAfterOptional(_)
            | CompileError::MultipleLists(_)
            | CompileError::InvalidRegex(..) => CmdLineError::unsupported(error.to_string()),
        }
    }
}

impl From<MatchError> for CmdLineError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::Undercomplete(_) => CmdLineError::Missing(error.to_string()),
            MatchError::Unmatched {
                ref suggestions, ..
            } => CmdLineError::Unsupported {
                message: error.to_string(),
                suggestions: suggestions.clone(),
            },
            MatchError::InvalidValue { value, pattern } => CmdLineError::Match { value, pattern },
        }
    }
}

impl From<CloseError> for CmdLineError {
    fn from(error: CloseError) -> Self {
        CmdLineError::from(MatchError::from(error))
    }
}
