//! Registry error types.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required field is missing or malformed.
    #[error("validation failed: {field} is required")]
    Validation { field: &'static str },

    /// Referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Attempt to mutate a built-in record.
    #[error("cannot modify built-in persona: {id}")]
    Forbidden { id: String },

    /// Identifier already in use.
    #[error("persona already exists: {id}")]
    Conflict { id: String },

    /// Store backend failure (I/O, database).
    #[error("store error: {0}")]
    Store(String),
}

impl RegistryError {
    /// Shorthand for a missing-persona error.
    pub fn persona_not_found(id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            entity: "persona",
            id: id.into(),
        }
    }

    /// Shorthand for a missing-agent error.
    pub fn agent_not_found(id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            entity: "agent",
            id: id.into(),
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
