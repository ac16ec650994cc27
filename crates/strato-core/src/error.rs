//! Shared error type across strato crates.

use thiserror::Error;

/// Stable error categories (used as logging/metrics labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input / misused builder.
    BadRequest,
    /// Network-level failure.
    Transport,
    /// Malformed or unexpected response body.
    Decode,
    /// Well-formed body without an entry for the requested function.
    AmbiguousEnvelope,
    /// Internal invariant violation.
    Internal,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Decode => "DECODE",
            ErrorKind::AmbiguousEnvelope => "AMBIGUOUS_ENVELOPE",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StratoError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum StratoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("no envelope entry for function {function}")]
    AmbiguousEnvelope { function: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl StratoError {
    /// Map an error to its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StratoError::BadRequest(_) => ErrorKind::BadRequest,
            StratoError::Transport(_) => ErrorKind::Transport,
            StratoError::Decode(_) => ErrorKind::Decode,
            StratoError::AmbiguousEnvelope { .. } => ErrorKind::AmbiguousEnvelope,
            StratoError::Internal(_) => ErrorKind::Internal,
        }
    }
}
