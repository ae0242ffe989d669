//! Error types for the converter.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown file format for '{path}' (expected .gib, .ngf, .ugf or .ugi)")]
    UnknownFormat { path: String },

    #[error("failed to parse {format} record: {reason}")]
    ParseFailure { format: String, reason: String },

    #[error("bad board size '{value}' (must be 1-19)")]
    BadBoardSize { value: String },

    #[error("point ({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(format: &str, reason: impl Into<String>) -> Self {
        Error::ParseFailure {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}
