//! Storage error types.

use thiserror::Error;

/// Errors that can occur while connecting or migrating.
///
/// Store-level failures surface through the `RegistryError` / `SessionError`
/// types of the traits being implemented.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
