//! `SQLite` implementation of [`StationRepository`].

use sqlx::SqlitePool;

use climate_app::ports::StationRepository;
use climate_domain::error::ClimateError;
use climate_domain::station::StationId;

use crate::error::StorageError;

const SELECT_IDS: &str = "SELECT station FROM station";

/// `SQLite`-backed station repository reading the `station` table.
pub struct SqliteStationRepository {
    pool: SqlitePool,
}

impl SqliteStationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StationRepository for SqliteStationRepository {
    async fn list_ids(&self) -> Result<Vec<StationId>, ClimateError> {
        let ids: Vec<String> = sqlx::query_scalar(SELECT_IDS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(ids.into_iter().map(StationId::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteStationRepository {
        let db = Config {
            read_only: false,
            ..Config::new("sqlite::memory:")
        }
        .build()
        .await
        .unwrap();
        crate::schema::create(db.pool()).await.unwrap();
        SqliteStationRepository::new(db.pool().clone())
    }

    async fn insert(repo: &SqliteStationRepository, station: &str, name: &str) {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(21.2716)
        .bind(-157.8168)
        .bind(3.0)
        .execute(&repo.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_return_empty_when_no_stations() {
        let repo = setup().await;
        assert!(repo.list_ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_ids_in_row_order_with_duplicates() {
        let repo = setup().await;
        insert(&repo, "USC00519397", "WAIKIKI 717.2, HI US").await;
        insert(&repo, "USC00513117", "KANEOHE 838.1, HI US").await;
        insert(&repo, "USC00519397", "WAIKIKI 717.2, HI US").await;

        let ids = repo.list_ids().await.unwrap();
        let ids: Vec<&str> = ids.iter().map(StationId::as_str).collect();
        assert_eq!(ids, vec!["USC00519397", "USC00513117", "USC00519397"]);
    }
}
