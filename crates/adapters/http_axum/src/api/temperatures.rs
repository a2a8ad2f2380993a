//! JSON handlers for temperature observations and statistics.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use climate_app::ports::{ObservationRepository, StationRepository};
use climate_domain::temperature::{TemperatureReading, TemperatureStats};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the trailing-year endpoint.
pub enum RecentResponse {
    /// 200 OK with `[date, temperature]` pairs, newest first.
    Ok(Json<Vec<TemperatureReading>>),
}

impl IntoResponse for RecentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the statistics endpoints.
pub enum StatsResponse {
    /// 200 OK with a one-element array holding `[min, avg, max]`.
    Ok(Json<Vec<TemperatureStats>>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/tobs`
pub async fn recent<OR, SR>(
    State(state): State<AppState<OR, SR>>,
) -> Result<RecentResponse, ApiError>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    let readings = state.climate_service.recent_temperatures().await?;
    Ok(RecentResponse::Ok(Json(readings)))
}

/// `GET /api/v1.0/{start_date}`, end defaults to the latest observation.
pub async fn stats_from<OR, SR>(
    State(state): State<AppState<OR, SR>>,
    Path(start_date): Path<String>,
) -> Result<StatsResponse, ApiError>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    let stats = state
        .climate_service
        .temperature_stats(&start_date, None)
        .await?;
    Ok(StatsResponse::Ok(Json(vec![stats])))
}

/// `GET /api/v1.0/{start_date}/{end_date}`
pub async fn stats_between<OR, SR>(
    State(state): State<AppState<OR, SR>>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<StatsResponse, ApiError>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    let stats = state
        .climate_service
        .temperature_stats(&start_date, Some(end_date.as_str()))
        .await?;
    Ok(StatsResponse::Ok(Json(vec![stats])))
}
