//! Users routes

use axum::Router;
use domain_users::handlers;

/// Create users router
pub fn router() -> Router {
    handlers::router()
}
