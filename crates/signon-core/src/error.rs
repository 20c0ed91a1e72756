//! Error types for signon-core.

use thiserror::Error;

/// Result type alias using signon-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for session operations
#[derive(Error, Debug)]
pub enum Error {
    // Session store errors
    #[error("session store error: {0}")]
    Storage(#[from] std::io::Error),

    // Identity service errors
    #[error("identity service error: {0}")]
    Identity(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not authenticated")]
    MissingAuth,
}

impl Error {
    /// Create an identity service error from any displayable cause
    pub fn identity(message: impl Into<String>) -> Self {
        Self::Identity(message.into())
    }

    /// True for the normalized credentials rejection surfaced by login
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Identity(e.to_string())
    }
}
