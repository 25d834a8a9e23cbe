//! Wiring of concrete adapters into application services.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::inbound::http::proxy::QuoteProxy;
use crate::adapter::inbound::http::state::AppState;
use crate::adapter::outbound::chart::ChartQuoteClient;
use crate::adapter::outbound::currency::CurrencyRateClient;
use crate::application::{CompensationService, PriceResolver};
use crate::infrastructure::config::settings::Config;
use crate::port::{QuoteSource, RateSource};

/// Build the stock quote source from configuration.
pub fn build_quote_source(config: &Config) -> Arc<dyn QuoteSource> {
    debug!(api_url = %config.quote.api_url, "Using chart quote source");
    Arc::new(ChartQuoteClient::from_config(&config.quote, &config.http))
}

/// Build the currency rate source from configuration.
pub fn build_rate_source(config: &Config) -> Arc<dyn RateSource> {
    debug!(api_url = %config.currency.api_url, "Using currency rate source");
    Arc::new(CurrencyRateClient::from_config(&config.currency, &config.http))
}

/// Build the compensation use case.
pub fn build_compensation_service(config: &Config) -> CompensationService {
    CompensationService::new(PriceResolver::new(
        build_quote_source(config),
        build_rate_source(config),
    ))
}

/// Build the shared state for the HTTP service.
pub fn build_app_state(config: &Config) -> Arc<AppState> {
    let proxy = QuoteProxy::from_config(&config.quote, &config.http, config.server.cache_ttl());
    AppState::new(proxy, build_compensation_service(config))
}
