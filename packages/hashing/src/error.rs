//! Error handling for the SHA-256 engine
//!
//! Every error here signals caller misuse. Nothing is transient and nothing
//! is worth retrying.

use thiserror::Error;

/// Errors raised by the SHA-256 engine and its async facade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// A state array or block buffer had the wrong size, or an offset fell outside its buffer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `update` or `finalize` was called on a finalized hasher without a `reset`
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The background hashing task went away before delivering its result
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Discriminant of a [`HashError`], handy for matching without the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`HashError::InvalidArgument`]
    InvalidArgument,
    /// See [`HashError::InvalidState`]
    InvalidState,
    /// See [`HashError::Internal`]
    Internal,
}

impl HashError {
    /// Create an `InvalidArgument` error
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an `InvalidState` error
    #[must_use]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<HashError> for std::io::Error {
    fn from(err: HashError) -> Self {
        std::io::Error::other(err)
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
