//! HTTP client for chart-style quote APIs.
//!
//! One request per lookup, no retries. Every failure collapses into a
//! [`FetchError`]; the underlying cause is only logged.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::parse_chart_quote;
use crate::domain::error::FetchError;
use crate::domain::quote::Quote;
use crate::infrastructure::config::http::HttpConfig;
use crate::infrastructure::config::market::QuoteConfig;
use crate::port::QuoteSource;

/// Quote lookups against `{api_url}/{SYMBOL}`.
pub struct ChartQuoteClient {
    http: HttpClient,
    api_url: String,
    require_usd: bool,
}

impl ChartQuoteClient {
    /// Create a client for the given base URL, rejecting non-USD quotes.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_url: api_url.into(),
            require_usd: true,
        }
    }

    #[must_use]
    pub fn from_config(quote: &QuoteConfig, http: &HttpConfig) -> Self {
        Self {
            http: http.build_client(),
            api_url: quote.api_url.clone(),
            require_usd: quote.require_usd,
        }
    }

    /// Accept quotes in any native currency.
    #[must_use]
    pub fn allow_non_usd(mut self) -> Self {
        self.require_usd = false;
        self
    }

    /// Build the lookup URL; the symbol is uppercased and percent-encoded
    /// as a single path segment.
    #[must_use]
    pub fn quote_url(&self, symbol: &str) -> Option<Url> {
        let mut url = Url::parse(&self.api_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(&symbol.to_ascii_uppercase());
        Some(url)
    }
}

#[async_trait]
impl QuoteSource for ChartQuoteClient {
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let url = self
            .quote_url(symbol)
            .ok_or(FetchError::UnexpectedStockResponse)?;

        info!(url = %url, "Fetching stock quote");

        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(symbol, error = %err, "Stock quote request failed");
            FetchError::UnexpectedStockResponse
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(symbol, status = status.as_u16(), "Stock quote lookup rejected");
            return Err(FetchError::InvalidStockSymbol);
        }

        let body: Value = response.json().await.map_err(|err| {
            warn!(symbol, error = %err, "Stock quote body is not JSON");
            FetchError::UnexpectedStockResponse
        })?;

        let quote = parse_chart_quote(symbol, &body, self.require_usd)?;
        debug!(symbol = %quote.symbol, price = %quote.price, "Fetched stock quote");
        Ok(quote)
    }

    fn source_name(&self) -> &'static str {
        "chart"
    }
}
