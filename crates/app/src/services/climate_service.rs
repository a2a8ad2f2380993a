//! Climate service — read-only use-cases over observations and stations.

use climate_domain::date::ObservationDate;
use climate_domain::error::{ClimateError, NoDataError};
use climate_domain::precipitation::PrecipitationByDate;
use climate_domain::station::StationId;
use climate_domain::temperature::{TemperatureReading, TemperatureStats};

use crate::ports::{ObservationRepository, StationRepository};

/// API paths advertised by the route listing.
pub const ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<yyyy-mm-dd>",
    "/api/v1.0/<yyyy-mm-dd>/<yyyy-mm-dd>",
];

/// Application service answering every climate query.
///
/// Holds no state besides its repositories, so a single instance can serve
/// concurrent requests.
pub struct ClimateService<O, S> {
    observations: O,
    stations: S,
}

impl<O, S> ClimateService<O, S>
where
    O: ObservationRepository,
    S: StationRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(observations: O, stations: S) -> Self {
        Self {
            observations,
            stations,
        }
    }

    /// Paths of the JSON API, in display order.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn list_routes(&self) -> &'static [&'static str] {
        &ROUTES
    }

    /// Precipitation keyed by date.
    ///
    /// When several readings share a date, the one read last from the
    /// store wins.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn precipitation(&self) -> Result<PrecipitationByDate, ClimateError> {
        let readings = self.observations.list_precipitation().await?;
        tracing::debug!(rows = readings.len(), "collapsing precipitation by date");
        Ok(readings.into_iter().collect())
    }

    /// All station identifiers in store order, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn stations(&self) -> Result<Vec<StationId>, ClimateError> {
        self.stations.list_ids().await
    }

    /// Temperature readings of the year ending on the latest observation
    /// date (both ends inclusive), newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::NoData`] when the store holds no observation,
    /// [`ClimateError::InvalidDate`] if the window start cannot be
    /// represented, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn recent_temperatures(&self) -> Result<Vec<TemperatureReading>, ClimateError> {
        let last = self.last_date().await?;
        let first = last.one_year_before()?;
        tracing::debug!(%first, %last, "querying trailing-year temperatures");
        self.observations.temperatures_between(first, last).await
    }

    /// Min/avg/max temperature between `start` and `end` inclusive.
    ///
    /// Both bounds are parsed before the store is touched. A missing `end`
    /// defaults to the latest observation date. An inverted range is not
    /// rejected, it simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::InvalidDate`] if either bound is not a
    /// `YYYY-MM-DD` date, [`ClimateError::NoData`] if `end` is omitted and
    /// the store is empty, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, ClimateError> {
        let start: ObservationDate = start.parse()?;
        let end = end.map(str::parse::<ObservationDate>).transpose()?;
        let end = match end {
            Some(end) => end,
            None => self.last_date().await?,
        };
        tracing::debug!(%start, %end, "computing temperature statistics");
        self.observations.temperature_stats(start, end).await
    }

    async fn last_date(&self) -> Result<ObservationDate, ClimateError> {
        self.observations
            .latest_date()
            .await?
            .ok_or_else(|| NoDataError.into())
    }
}
