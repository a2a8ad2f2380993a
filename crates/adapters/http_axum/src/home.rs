//! Plain-text route listing served at `/`.

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use climate_app::ports::{ObservationRepository, StationRepository};

use crate::state::AppState;

/// The advertised API paths, rendered one per line.
pub struct RouteListing(&'static [&'static str]);

impl IntoResponse for RouteListing {
    fn into_response(self) -> Response {
        let mut body = String::from("Available Routes:\n");
        for route in self.0 {
            body.push_str(route);
            body.push('\n');
        }
        body.into_response()
    }
}

/// `GET /`
pub async fn index<OR, SR>(State(state): State<AppState<OR, SR>>) -> RouteListing
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    RouteListing(state.climate_service.list_routes())
}
