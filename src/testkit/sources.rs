//! Fake market data sources.
//!
//! - [`StaticQuotes`] answers every symbol with the same canned result.
//! - [`StaticRates`] answers every currency code with the same canned result.
//!
//! Both can be delayed to exercise the concurrent lookup, and count calls so
//! tests can assert that no lookup happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::domain::error::FetchError;
use crate::domain::quote::Quote;
use crate::port::{QuoteSource, RateSource};

/// Quote source returning a fixed result.
pub struct StaticQuotes {
    result: Result<Quote, FetchError>,
    delay: Duration,
    calls: AtomicUsize,
    symbols: Mutex<Vec<String>>,
}

impl StaticQuotes {
    pub fn ok(quote: Quote) -> Self {
        Self::with_result(Ok(quote))
    }

    pub fn failing(error: FetchError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<Quote, FetchError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            symbols: Mutex::new(Vec::new()),
        }
    }

    /// Answer only after `delay`.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Symbols requested so far, in call order.
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.lock().clone()
    }
}

#[async_trait]
impl QuoteSource for StaticQuotes {
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.symbols.lock().push(symbol.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Rate source returning a fixed result.
pub struct StaticRates {
    result: Result<Decimal, FetchError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StaticRates {
    pub fn ok(rate: Decimal) -> Self {
        Self::with_result(Ok(rate))
    }

    pub fn failing(error: FetchError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<Decimal, FetchError>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for StaticRates {
    async fn usd_rate(&self, _code: &str) -> Result<Decimal, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
