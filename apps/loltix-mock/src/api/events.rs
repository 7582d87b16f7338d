//! Events routes

use axum::Router;
use domain_events::handlers;

use crate::state::AppState;

/// Create events router over the shared seed dataset
pub fn router(state: &AppState) -> Router {
    handlers::router(state.events.clone())
}
