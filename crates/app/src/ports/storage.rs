//! Storage port — read-only repository traits over the observation store.
//!
//! Implementations must not keep state between calls: every method reads
//! the current contents of the store.

use std::future::Future;

use climate_domain::date::ObservationDate;
use climate_domain::error::ClimateError;
use climate_domain::precipitation::PrecipitationReading;
use climate_domain::station::StationId;
use climate_domain::temperature::{TemperatureReading, TemperatureStats};

/// Read access to recorded observations.
pub trait ObservationRepository {
    /// Every precipitation reading, in the store's natural row order.
    fn list_precipitation(
        &self,
    ) -> impl Future<Output = Result<Vec<PrecipitationReading>, ClimateError>> + Send;

    /// The most recent observation date, `None` when the store is empty.
    fn latest_date(
        &self,
    ) -> impl Future<Output = Result<Option<ObservationDate>, ClimateError>> + Send;

    /// Temperature readings with `from <= date <= to`, newest first.
    fn temperatures_between(
        &self,
        from: ObservationDate,
        to: ObservationDate,
    ) -> impl Future<Output = Result<Vec<TemperatureReading>, ClimateError>> + Send;

    /// Min/avg/max temperature for `from <= date <= to`.
    fn temperature_stats(
        &self,
        from: ObservationDate,
        to: ObservationDate,
    ) -> impl Future<Output = Result<TemperatureStats, ClimateError>> + Send;
}

/// Read access to the registered weather stations.
pub trait StationRepository {
    /// Every station identifier, in the store's natural row order.
    fn list_ids(&self) -> impl Future<Output = Result<Vec<StationId>, ClimateError>> + Send;
}
