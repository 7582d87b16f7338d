//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and error fallbacks
//! - The health endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let router = create_router::<ApiDoc>("/mock", api_routes, cors);
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), timeout, async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{DOCS_PATH, OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
