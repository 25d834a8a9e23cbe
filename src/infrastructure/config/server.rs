//! HTTP service settings.

use std::time::Duration;

use serde::Deserialize;

/// Bind address and proxy cache settings for `vestcalc serve`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// How long successful quote responses are cached and advertised as
    /// cacheable, in seconds.
    pub cache_ttl_seconds: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// `bind:port` for the listener.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
            cache_ttl_seconds: 60,
        }
    }
}
