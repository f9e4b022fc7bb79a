//! Session error types.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Referenced session does not exist.
    #[error("session not found: {id}")]
    NotFound { id: String },

    /// Store backend failure (I/O, database).
    #[error("session store error: {0}")]
    Store(String),
}

impl SessionError {
    /// Shorthand for a missing-session error.
    pub fn not_found(id: impl Into<String>) -> Self {
        SessionError::NotFound { id: id.into() }
    }
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
