//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use climate_app::ports::{ObservationRepository, StationRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the route listing at `/` and nests the JSON API under `/api/v1.0`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<OR, SR>(state: AppState<OR, SR>) -> Router
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::home::index::<OR, SR>))
        .route("/health", get(health_check))
        .nest("/api/v1.0", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
