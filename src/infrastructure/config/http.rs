//! Outbound HTTP client settings.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

/// Settings shared by the quote and currency clients.
///
/// No timeout is applied unless `timeout_ms` is set: a hung lookup hangs
/// the calculation, and lookups are never retried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Optional whole-request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl HttpConfig {
    /// Build a reqwest client from these settings.
    #[must_use]
    pub fn build_client(&self) -> reqwest::Client {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout_ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            reqwest::Client::new()
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            user_agent: concat!("vestcalc/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}
