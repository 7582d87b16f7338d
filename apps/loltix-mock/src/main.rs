//! Loltix mock API - events, event details and sample users

use axum_helpers::http::cors_layer_from_env;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Seed dataset is built once and shared by every request
    let state = AppState::new(config);

    let cors = cors_layer_from_env()?;
    let router = create_router::<openapi::ApiDoc>(api::PREFIX, api::routes(&state), cors);
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on port {}, docs at {}/docs",
        state.config.app.name,
        state.config.app.version,
        state.config.server.port,
        api::PREFIX
    );

    create_production_app(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            info!("Shutting down: in-memory dataset released with the process");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Loltix mock shutdown complete");
    Ok(())
}
