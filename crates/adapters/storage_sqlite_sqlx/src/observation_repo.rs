//! `SQLite` implementation of [`ObservationRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use climate_app::ports::ObservationRepository;
use climate_domain::date::ObservationDate;
use climate_domain::error::ClimateError;
use climate_domain::precipitation::PrecipitationReading;
use climate_domain::temperature::{TemperatureReading, TemperatureStats};

use crate::error::StorageError;

fn decode_date(value: &str) -> Result<ObservationDate, sqlx::Error> {
    value
        .parse()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting `(date, prcp)` rows without polluting domain
/// structs with database concerns.
struct PrecipitationRow(PrecipitationReading);

impl<'r> FromRow<'r, SqliteRow> for PrecipitationRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: String = row.try_get("date")?;
        let prcp: Option<f64> = row.try_get("prcp")?;

        Ok(Self(PrecipitationReading::new(decode_date(&date)?, prcp)))
    }
}

/// Wrapper for converting `(date, tobs)` rows.
struct TemperatureRow(TemperatureReading);

impl<'r> FromRow<'r, SqliteRow> for TemperatureRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: String = row.try_get("date")?;
        let tobs: f64 = row.try_get("tobs")?;

        Ok(Self(TemperatureReading::new(decode_date(&date)?, tobs)))
    }
}

const SELECT_PRECIPITATION: &str = "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement";

const SELECT_LATEST_DATE: &str = "SELECT MAX(date) FROM measurement";

const SELECT_TEMPERATURES_BETWEEN: &str = r"
    SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement
    WHERE date BETWEEN ? AND ?
    ORDER BY date DESC
";

const SELECT_TEMPERATURE_STATS: &str = r"
    SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
    FROM measurement
    WHERE date >= ? AND date <= ?
";

/// `SQLite`-backed observation repository reading the `measurement` table.
pub struct SqliteObservationRepository {
    pool: SqlitePool,
}

impl SqliteObservationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ObservationRepository for SqliteObservationRepository {
    async fn list_precipitation(&self) -> Result<Vec<PrecipitationReading>, ClimateError> {
        let rows: Vec<PrecipitationRow> = sqlx::query_as(SELECT_PRECIPITATION)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn latest_date(&self) -> Result<Option<ObservationDate>, ClimateError> {
        let latest: Option<String> = sqlx::query_scalar(SELECT_LATEST_DATE)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let latest = latest
            .as_deref()
            .map(decode_date)
            .transpose()
            .map_err(StorageError::from)?;
        Ok(latest)
    }

    async fn temperatures_between(
        &self,
        from: ObservationDate,
        to: ObservationDate,
    ) -> Result<Vec<TemperatureReading>, ClimateError> {
        let rows: Vec<TemperatureRow> = sqlx::query_as(SELECT_TEMPERATURES_BETWEEN)
            .bind(from.to_string())
            .bind(to.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn temperature_stats(
        &self,
        from: ObservationDate,
        to: ObservationDate,
    ) -> Result<TemperatureStats, ClimateError> {
        let row: (Option<f64>, Option<f64>, Option<f64>) =
            sqlx::query_as(SELECT_TEMPERATURE_STATS)
                .bind(from.to_string())
                .bind(to.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?;

        Ok(TemperatureStats::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteObservationRepository {
        let db = Config {
            read_only: false,
            ..Config::new("sqlite::memory:")
        }
        .build()
        .await
        .unwrap();
        crate::schema::create(db.pool()).await.unwrap();
        SqliteObservationRepository::new(db.pool().clone())
    }

    async fn insert(repo: &SqliteObservationRepository, date: &str, prcp: Option<f64>, tobs: f64) {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind("USC00519397")
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&repo.pool)
            .await
            .unwrap();
    }

    fn date(s: &str) -> ObservationDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn should_list_precipitation_in_row_order() {
        let repo = setup().await;
        insert(&repo, "2017-01-02", Some(0.3), 70.0).await;
        insert(&repo, "2017-01-01", None, 71.0).await;
        insert(&repo, "2017-01-02", Some(0.9), 72.0).await;

        let readings = repo.list_precipitation().await.unwrap();
        assert_eq!(
            readings,
            vec![
                PrecipitationReading::new(date("2017-01-02"), Some(0.3)),
                PrecipitationReading::new(date("2017-01-01"), None),
                PrecipitationReading::new(date("2017-01-02"), Some(0.9)),
            ]
        );
    }

    #[tokio::test]
    async fn should_return_no_latest_date_when_empty() {
        let repo = setup().await;
        assert_eq!(repo.latest_date().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_return_maximum_date() {
        let repo = setup().await;
        insert(&repo, "2016-08-23", None, 70.0).await;
        insert(&repo, "2017-08-23", None, 80.0).await;
        insert(&repo, "2017-01-01", None, 75.0).await;

        assert_eq!(repo.latest_date().await.unwrap(), Some(date("2017-08-23")));
    }

    #[tokio::test]
    async fn should_select_inclusive_range_newest_first() {
        let repo = setup().await;
        insert(&repo, "2016-08-22", None, 60.0).await;
        insert(&repo, "2016-08-23", None, 61.0).await;
        insert(&repo, "2017-03-01", None, 62.0).await;
        insert(&repo, "2017-08-23", None, 63.0).await;
        insert(&repo, "2017-08-24", None, 64.0).await;

        let readings = repo
            .temperatures_between(date("2016-08-23"), date("2017-08-23"))
            .await
            .unwrap();

        assert_eq!(
            readings,
            vec![
                TemperatureReading::new(date("2017-08-23"), 63.0),
                TemperatureReading::new(date("2017-03-01"), 62.0),
                TemperatureReading::new(date("2016-08-23"), 61.0),
            ]
        );
    }

    #[tokio::test]
    async fn should_compute_stats_for_single_row() {
        let repo = setup().await;
        insert(&repo, "2016-01-01", Some(0.0), 60.0).await;
        insert(&repo, "2016-01-02", Some(0.0), 70.0).await;

        let stats = repo
            .temperature_stats(date("2016-01-01"), date("2016-01-01"))
            .await
            .unwrap();

        assert_eq!(stats.min, Some(60.0));
        assert_eq!(stats.avg, Some(60.0));
        assert_eq!(stats.max, Some(60.0));
    }

    #[tokio::test]
    async fn should_compute_stats_across_stations_and_dates() {
        let repo = setup().await;
        insert(&repo, "2017-01-01", None, 62.0).await;
        insert(&repo, "2017-01-01", None, 70.0).await;
        insert(&repo, "2017-01-05", None, 78.0).await;

        let stats = repo
            .temperature_stats(date("2017-01-01"), date("2017-01-31"))
            .await
            .unwrap();

        assert_eq!(stats.min, Some(62.0));
        assert_eq!(stats.avg, Some(70.0));
        assert_eq!(stats.max, Some(78.0));
    }

    #[tokio::test]
    async fn should_return_null_stats_when_nothing_matches() {
        let repo = setup().await;
        insert(&repo, "2017-01-01", None, 62.0).await;

        let stats = repo
            .temperature_stats(date("2018-01-01"), date("2018-12-31"))
            .await
            .unwrap();
        assert!(stats.is_empty());

        let inverted = repo
            .temperature_stats(date("2017-12-31"), date("2017-01-01"))
            .await
            .unwrap();
        assert!(inverted.is_empty());
    }

    #[tokio::test]
    async fn should_read_integer_columns_as_floats() {
        let db = Config {
            read_only: false,
            ..Config::new("sqlite::memory:")
        }
        .build()
        .await
        .unwrap();
        sqlx::query(
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp INTEGER, tobs INTEGER)",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES ('USC00519397', '2016-01-01', 0, 60)")
            .execute(db.pool())
            .await
            .unwrap();
        let repo = SqliteObservationRepository::new(db.pool().clone());

        let readings = repo
            .temperatures_between(date("2015-01-01"), date("2016-01-01"))
            .await
            .unwrap();
        assert_eq!(readings, vec![TemperatureReading::new(date("2016-01-01"), 60.0)]);

        let precipitation = repo.list_precipitation().await.unwrap();
        assert_eq!(
            precipitation,
            vec![PrecipitationReading::new(date("2016-01-01"), Some(0.0))]
        );

        let stats = repo
            .temperature_stats(date("2016-01-01"), date("2016-01-01"))
            .await
            .unwrap();
        assert_eq!(stats.avg, Some(60.0));
    }

    #[tokio::test]
    async fn should_report_store_error_when_table_missing() {
        let db = Config {
            read_only: false,
            ..Config::new("sqlite::memory:")
        }
        .build()
        .await
        .unwrap();
        let repo = SqliteObservationRepository::new(db.pool().clone());

        let result = repo.list_precipitation().await;
        assert!(matches!(result, Err(ClimateError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn should_report_store_error_when_stored_date_is_malformed() {
        let repo = setup().await;
        insert(&repo, "23/08/2017", None, 80.0).await;

        let result = repo.list_precipitation().await;
        assert!(matches!(result, Err(ClimateError::StoreUnavailable(_))));
    }
}
