//! Configuration for the Loltix mock

use core_config::{app_info, env_duration_secs, server::ServerConfig, AppInfo};
use std::time::Duration;

pub use core_config::Environment;

/// Port the mock has always listened on
pub const DEFAULT_PORT: u16 = 8000;

const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_or(DEFAULT_PORT)?;
        let shutdown_timeout = env_duration_secs("SHUTDOWN_TIMEOUT_SECS", DEFAULT_SHUTDOWN_TIMEOUT)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            shutdown_timeout,
        })
    }
}
