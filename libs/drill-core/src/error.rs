//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while reading and validating a study set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line} has {found} fields, expected {expected}: [{}]", .content.join(", "))]
    Schema {
        line: usize,
        found: usize,
        expected: usize,
        content: Vec<String>,
    },

    #[error("set contains duplicates [{}]", .keys.join(" / "))]
    Duplicate { keys: Vec<String> },

    #[error("set contains no words")]
    Empty,

    #[error("unterminated quoted field starting at line {line}")]
    UnterminatedQuote { line: usize },
}

/// Errors raised while a study session is running.
///
/// Grading never fails; only the interaction interface can.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interaction failed: {0}")]
    Io(#[from] std::io::Error),
}
