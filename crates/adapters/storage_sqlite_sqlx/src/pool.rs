//! `SQLite` connection pool setup.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// How long a query waits for a pooled connection before giving up.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:Resources/hawaii.sqlite` or `sqlite::memory:`).
    pub database_url: String,
    /// Open every connection read-only. The API never writes, so this is
    /// only turned off to seed fresh databases.
    pub read_only: bool,
    /// Upper bound on waiting for a connection.
    pub acquire_timeout: Duration,
}

impl Config {
    /// Read-only configuration for `database_url` with the default timeout.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            read_only: true,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// The database must already exist; it is never created.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is malformed or the first
    /// connection cannot be opened.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(config: &Config) -> Result<Self, StorageError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.read_only(config.read_only);

        let pool = SqlitePoolOptions::new()
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
