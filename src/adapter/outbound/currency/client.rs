//! HTTP client for the per-USD currency conversion API.
//!
//! `GET {api_url}/{code}.json` answers `{"date": "...", "<code>": <rate>}`.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::error::FetchError;
use crate::infrastructure::config::http::HttpConfig;
use crate::infrastructure::config::market::CurrencyConfig;
use crate::port::RateSource;

/// USD conversion rate lookups.
pub struct CurrencyRateClient {
    http: HttpClient,
    api_url: String,
}

impl CurrencyRateClient {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_url: api_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(currency: &CurrencyConfig, http: &HttpConfig) -> Self {
        Self {
            http: http.build_client(),
            api_url: currency.api_url.clone(),
        }
    }

    #[must_use]
    pub fn rate_url(&self, code: &str) -> Option<Url> {
        let mut url = Url::parse(&self.api_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(&format!("{code}.json"));
        Some(url)
    }
}

/// Extract the rate for `code` from a conversion response body.
pub fn parse_rate(code: &str, body: &Value) -> Result<Decimal, FetchError> {
    body.get(code)
        .and_then(Value::as_f64)
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .and_then(|rate| Decimal::try_from(rate).ok())
        .ok_or(FetchError::UnexpectedCurrencyResponse)
}

#[async_trait]
impl RateSource for CurrencyRateClient {
    async fn usd_rate(&self, code: &str) -> Result<Decimal, FetchError> {
        let code = code.trim().to_ascii_lowercase();
        let url = self
            .rate_url(&code)
            .ok_or(FetchError::UnexpectedCurrencyResponse)?;

        info!(url = %url, "Fetching currency rate");

        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(code = %code, error = %err, "Currency rate request failed");
            FetchError::UnexpectedCurrencyResponse
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(code = %code, status = status.as_u16(), "Currency lookup rejected");
            return Err(FetchError::InvalidCurrency);
        }

        let body: Value = response.json().await.map_err(|err| {
            warn!(code = %code, error = %err, "Currency body is not JSON");
            FetchError::UnexpectedCurrencyResponse
        })?;

        let rate = parse_rate(&code, &body)?;
        debug!(code = %code, rate = %rate, "Fetched currency rate");
        Ok(rate)
    }

    fn source_name(&self) -> &'static str {
        "currency"
    }
}
