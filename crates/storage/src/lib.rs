//! SQLite persistence layer for FrankX personas and sessions.
//!
//! The default stores are in-memory and die with the process; this crate
//! provides the durable alternatives behind the same `PersonaStore` /
//! `SessionStore` traits, using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use storage::{Database, SqlitePersonaStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:frankx.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let personas = SqlitePersonaStore::new(db.pool().clone());
//!     Ok(())
//! }
//! ```

mod error;
mod persona_store;
mod session_store;

pub use error::StorageError;
pub use persona_store::SqlitePersonaStore;
pub use session_store::SqliteSessionStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Default pool size for database connections.
const DEFAULT_POOL_SIZE: u32 = 20;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist, or
    /// `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        // An in-memory database exists per connection; more than one
        // connection in the pool would see different databases.
        let pool_size = if url.contains(":memory:") {
            1
        } else {
            DEFAULT_POOL_SIZE
        };
        Self::connect_with_pool_size(url, pool_size).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Call once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}
