//! JSON API handler modules, mounted under `/api/v1.0`.

#[allow(clippy::missing_errors_doc)]
pub mod precipitation;
#[allow(clippy::missing_errors_doc)]
pub mod stations;
#[allow(clippy::missing_errors_doc)]
pub mod temperatures;

use axum::Router;
use axum::routing::get;

use climate_app::ports::{ObservationRepository, StationRepository};

use crate::state::AppState;

/// Build the `/api/v1.0` sub-router.
///
/// Static segments take precedence over the date captures, so `/tobs` never
/// reaches the statistics handler.
pub fn routes<OR, SR>() -> Router<AppState<OR, SR>>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/precipitation", get(precipitation::get::<OR, SR>))
        .route("/stations", get(stations::list::<OR, SR>))
        .route("/tobs", get(temperatures::recent::<OR, SR>))
        .route("/{start_date}", get(temperatures::stats_from::<OR, SR>))
        .route(
            "/{start_date}/{end_date}",
            get(temperatures::stats_between::<OR, SR>),
        )
}
