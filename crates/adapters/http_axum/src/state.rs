//! Shared application state for axum handlers.

use std::sync::Arc;

use climate_app::ports::{ObservationRepository, StationRepository};
use climate_app::services::climate_service::ClimateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`. Only the `Arc` wrapper is cloned.
pub struct AppState<OR, SR> {
    /// Read-only climate queries.
    pub climate_service: Arc<ClimateService<OR, SR>>,
}

impl<OR, SR> Clone for AppState<OR, SR> {
    fn clone(&self) -> Self {
        Self {
            climate_service: Arc::clone(&self.climate_service),
        }
    }
}

impl<OR, SR> AppState<OR, SR>
where
    OR: ObservationRepository + Send + Sync + 'static,
    SR: StationRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(climate_service: ClimateService<OR, SR>) -> Self {
        Self {
            climate_service: Arc::new(climate_service),
        }
    }
}
