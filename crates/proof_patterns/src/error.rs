//! Error types for rule compilation and rule-set configuration.
//!
//! Failing to match is never an error: the matcher returns `None` and rule
//! checkers return [`RuleOutcome::NoMatch`](crate::RuleOutcome::NoMatch).
//! The variants below only arise while building rules.

use thiserror::Error;

/// A specialized `Result` type for rule construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that can occur while compiling or loading rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pattern string could not be parsed.
    #[error("Parse error at byte {position}: {message}")]
    Parse { position: usize, message: String },

    /// A rule was defined incorrectly.
    #[error("Invalid rule definition: {0}")]
    InvalidRule(String),

    /// Two rules in a rule set share a name.
    #[error("Duplicate rule: {0}")]
    DuplicateRule(String),

    /// A rule was looked up by a name that is not registered.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// Reading a rule definition file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// An error occurred during data serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            position,
            message: message.into(),
        }
    }

    /// Wraps this error with the name of the rule being compiled.
    pub(crate) fn in_rule(self, rule: &str) -> Self {
        match self {
            Error::Parse { position, message } => Error::Parse {
                position,
                message: format!("{} (in rule '{}')", message, rule),
            },
            Error::InvalidRule(msg) => Error::InvalidRule(format!("{}: {}", rule, msg)),
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
