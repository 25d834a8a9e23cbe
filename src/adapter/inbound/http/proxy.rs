//! Caching pass-through for chart quote lookups.
//!
//! `GET /stock/{symbol}` forwards to `{upstream_url}/{SYMBOL}` and relays the
//! upstream JSON verbatim. Failures always answer with an empty `{}` body so
//! browser clients never see upstream error payloads.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Client as HttpClient;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use url::Url;

use super::cache::QuoteCache;
use super::state::AppState;
use crate::infrastructure::config::http::HttpConfig;
use crate::infrastructure::config::market::QuoteConfig;

/// Result of one proxied lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    /// Upstream answered 2xx with a JSON body (possibly served from cache).
    Quote(Value),
    /// Upstream answered with a non-success status.
    Rejected(StatusCode),
    /// Upstream could not be reached or did not answer JSON.
    Unavailable,
}

/// Forwards symbol lookups upstream, caching successful bodies.
pub struct QuoteProxy {
    http: HttpClient,
    upstream_url: String,
    cache: QuoteCache,
}

impl QuoteProxy {
    #[must_use]
    pub fn new(upstream_url: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            http: HttpClient::new(),
            upstream_url: upstream_url.into(),
            cache: QuoteCache::new(cache_ttl),
        }
    }

    #[must_use]
    pub fn from_config(quote: &QuoteConfig, http: &HttpConfig, cache_ttl: Duration) -> Self {
        Self {
            http: http.build_client(),
            upstream_url: quote.upstream_url.clone(),
            cache: QuoteCache::new(cache_ttl),
        }
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    fn upstream_url(&self, symbol: &str) -> Option<Url> {
        let mut url = Url::parse(&self.upstream_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(symbol);
        Some(url)
    }

    /// Look up `symbol`, serving from cache when fresh.
    pub async fn fetch(&self, symbol: &str) -> ProxyOutcome {
        let symbol = symbol.trim().to_ascii_uppercase();

        if let Some(body) = self.cache.get(&symbol) {
            debug!(symbol = %symbol, "Quote cache hit");
            return ProxyOutcome::Quote(body);
        }

        let Some(url) = self.upstream_url(&symbol) else {
            warn!(upstream = %self.upstream_url, "Invalid upstream URL");
            return ProxyOutcome::Unavailable;
        };

        info!(url = %url, "Proxying stock quote");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "Upstream quote request failed");
                return ProxyOutcome::Unavailable;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                symbol = %symbol,
                status = status.as_u16(),
                body = %body,
                "Upstream rejected quote lookup"
            );
            let status =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return ProxyOutcome::Rejected(status);
        }

        match response.json::<Value>().await {
            Ok(body) => {
                self.cache.insert(&symbol, body.clone());
                ProxyOutcome::Quote(body)
            }
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "Upstream quote body is not JSON");
                ProxyOutcome::Unavailable
            }
        }
    }
}

fn empty(status: StatusCode) -> Response {
    (status, Json(json!({}))).into_response()
}

/// `GET /stock/{symbol}`
pub async fn stock_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Response {
    if symbol.trim().is_empty() {
        return empty(StatusCode::UNPROCESSABLE_ENTITY);
    }

    match state.proxy.fetch(&symbol).await {
        ProxyOutcome::Quote(body) => {
            let cache_control = format!("public, max-age={}", state.proxy.cache_ttl().as_secs());
            ([(header::CACHE_CONTROL, cache_control)], Json(body)).into_response()
        }
        ProxyOutcome::Rejected(status) => empty(status),
        ProxyOutcome::Unavailable => empty(StatusCode::BAD_GATEWAY),
    }
}

/// `GET /stock` and `GET /stock/` with no symbol.
pub async fn missing_symbol() -> Response {
    empty(StatusCode::UNPROCESSABLE_ENTITY)
}
