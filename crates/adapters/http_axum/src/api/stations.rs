//! JSON handler for the station list.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use climate_app::ports::{ObservationRepository, StationRepository};
use climate_domain::station::StationId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the stations endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StationId>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/stations`
pub async fn list<OR, SR>(State(state): State<AppState<OR, SR>>) -> Result<ListResponse, ApiError>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    let ids = state.climate_service.stations().await?;
    Ok(ListResponse::Ok(Json(ids)))
}
