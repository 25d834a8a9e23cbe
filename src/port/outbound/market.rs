//! Market data ports: stock quotes and currency conversion rates.
//!
//! Implementations map every failure (transport, status, body shape) onto a
//! [`FetchError`], whose message is shown to the user as-is.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::error::FetchError;
use crate::domain::quote::Quote;

/// Source of stock quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Look up the current market price for `symbol`.
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError>;

    /// Get the source name for logging.
    fn source_name(&self) -> &'static str;
}

/// Source of USD conversion rates.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Multiplier converting one USD into the currency `code` (lowercase).
    async fn usd_rate(&self, code: &str) -> Result<Decimal, FetchError>;

    /// Get the source name for logging.
    fn source_name(&self) -> &'static str;
}
