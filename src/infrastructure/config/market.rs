//! Quote and currency API endpoints.

use serde::Deserialize;

/// Public chart API serving `{chart:{result:[{meta:{..}}]}}` per symbol.
pub const DEFAULT_CHART_API_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Public per-USD conversion API serving `{"<code>": <rate>}` per code.
pub const DEFAULT_CURRENCY_API_URL: &str =
    "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@1/latest/currencies/usd";

/// Stock quote lookup configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Base URL the calculator queries, as `{api_url}/{SYMBOL}`.
    ///
    /// Point this at a running `vestcalc serve` (`http://host:port/stock`)
    /// to go through the caching proxy.
    pub api_url: String,
    /// Base URL the proxy forwards `/stock/{symbol}` requests to.
    pub upstream_url: String,
    /// Reject quotes whose native currency is not USD.
    pub require_usd: bool,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CHART_API_URL.into(),
            upstream_url: DEFAULT_CHART_API_URL.into(),
            require_usd: true,
        }
    }
}

/// Currency conversion lookup configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Base URL queried as `{api_url}/{code}.json`.
    pub api_url: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CURRENCY_API_URL.into(),
        }
    }
}
