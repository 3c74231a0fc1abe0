//! Shared error types for input parsing and aggregation

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linetally operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input source cannot be opened or read
    #[error("failed to read input {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A group line did not parse as an integer
    #[error("line {line}: expected an integer, found {content:?}")]
    InvalidInteger { line: usize, content: String },

    /// A round line did not split into exactly two single-character tokens
    #[error("line {line}: expected two single-character tokens, found {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A round token fell outside its expected character range
    #[error("line {line}: token {token:?} outside expected range {expected}")]
    TokenOutOfRange {
        line: usize,
        token: char,
        expected: &'static str,
    },
}

impl Error {
    /// Line number the error points at, if it concerns a specific line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io { .. } => None,
            Error::InvalidInteger { line, .. }
            | Error::MalformedLine { line, .. }
            | Error::TokenOutOfRange { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
