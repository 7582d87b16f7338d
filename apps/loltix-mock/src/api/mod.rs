//! API routes module

pub mod events;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Mount point of every mock route
pub const PREFIX: &str = "/mock";

/// Create all API routes, relative to [`PREFIX`]
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/events", events::router(state))
        .nest("/users", users::router())
}
