//! Application state management

use domain_events::{EventService, SeedEventRepository};

use crate::config::Config;

/// Shared application state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub events: EventService<SeedEventRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            events: EventService::new(SeedEventRepository::new()),
        }
    }
}
