//! Client configuration loaded from the environment.
use std::env;

use kicker_runtime::RuntimeConfig;

/// Configuration required to bootstrap the engine and its surrounding layers.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Bind address handed to the external API layer.
    pub server_address: String,
}

impl ClientConfig {
    pub const DEFAULT_SERVER_ADDRESS: &'static str = "0.0.0.0:3000";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KICKER_SERVER_ADDRESS` - API bind address (default: 0.0.0.0:3000)
    /// - everything read by [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            server_address: env::var("KICKER_SERVER_ADDRESS")
                .ok()
                .filter(|addr| !addr.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_SERVER_ADDRESS.to_owned()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            server_address: Self::DEFAULT_SERVER_ADDRESS.to_owned(),
        }
    }
}
