//! Table layout expected in the observation store.
//!
//! The API only reads these tables. [`create`] exists to bootstrap empty
//! databases for local development and tests.

use sqlx::SqlitePool;

use crate::error::StorageError;

/// Weather stations. Only `station` is read; the rest is descriptive.
pub const CREATE_STATION: &str = r"
    CREATE TABLE IF NOT EXISTS station (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        name TEXT,
        latitude REAL,
        longitude REAL,
        elevation REAL
    )
";

/// Daily observations. `date` holds `YYYY-MM-DD` text, `prcp` may be null.
pub const CREATE_MEASUREMENT: &str = r"
    CREATE TABLE IF NOT EXISTS measurement (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp REAL,
        tobs REAL NOT NULL
    )
";

/// Create both tables if they do not exist yet.
///
/// # Errors
///
/// Returns [`StorageError`] if a statement fails, e.g. on a read-only pool.
pub async fn create(pool: &SqlitePool) -> Result<(), StorageError> {
    for statement in [CREATE_STATION, CREATE_MEASUREMENT] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
