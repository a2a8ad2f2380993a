//! JSON handler for the precipitation map.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use climate_app::ports::{ObservationRepository, StationRepository};
use climate_domain::precipitation::PrecipitationByDate;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the precipitation endpoint.
pub enum GetResponse {
    /// 200 OK with a `{date: precipitation}` object.
    Ok(Json<PrecipitationByDate>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/precipitation`
pub async fn get<OR, SR>(State(state): State<AppState<OR, SR>>) -> Result<GetResponse, ApiError>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    let map = state.climate_service.precipitation().await?;
    Ok(GetResponse::Ok(Json(map)))
}
