//! # climate-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `climate-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (read-only, bounded acquire)
//! - Describe the expected `measurement` / `station` table layout
//! - Map between database rows and domain types
//!
//! ## Dependency rule
//! Depends on `climate-app` (for port traits) and `climate-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod observation_repo;
pub mod pool;
pub mod schema;
pub mod station_repo;

pub use error::StorageError;
pub use observation_repo::SqliteObservationRepository;
pub use pool::{Config, Database};
pub use station_repo::SqliteStationRepository;
