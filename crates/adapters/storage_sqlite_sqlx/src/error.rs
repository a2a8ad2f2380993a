//! Storage-specific error type wrapping sqlx errors.

use climate_domain::error::ClimateError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A connection, query or row decoding failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for ClimateError {
    fn from(err: StorageError) -> Self {
        Self::StoreUnavailable(Box::new(err))
    }
}
