//! Fetch error types
//!
//! Everything that can go wrong between issuing a GET and holding a
//! normalized record sequence.

use thiserror::Error;

/// Errors produced by the fetch-and-normalize routine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backend answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success HTTP status
    Request,
    /// Malformed JSON body
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Status { .. } | FetchError::Network(_) => ErrorKind::Request,
            FetchError::Parse(_) => ErrorKind::Parse,
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
