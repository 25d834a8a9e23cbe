//! Concurrent stock price and currency rate resolution.
//!
//! Both lookups start together and are joined: the result is available only
//! when both succeed, and the first failure to arrive is the one reported
//! (the other lookup is dropped). Literal prices and USD skip the network.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::error::FetchError;
use crate::domain::quote::{CurrencyChoice, Quote, StockInput};
use crate::port::{QuoteSource, RateSource};

/// Stock price and conversion rate for one calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrices {
    /// Price of one share in USD.
    pub stock_price: Decimal,
    /// USD to target currency multiplier.
    pub currency_rate: Decimal,
    /// The quote, when the price came from a lookup.
    pub quote: Option<Quote>,
}

/// Resolves stock input and currency choice into prices.
#[derive(Clone)]
pub struct PriceResolver {
    quotes: Arc<dyn QuoteSource>,
    rates: Arc<dyn RateSource>,
}

impl PriceResolver {
    pub fn new(quotes: Arc<dyn QuoteSource>, rates: Arc<dyn RateSource>) -> Self {
        Self { quotes, rates }
    }

    /// Resolve both prices, running the lookups concurrently.
    pub async fn resolve(
        &self,
        stock: &StockInput,
        currency: &CurrencyChoice,
    ) -> Result<ResolvedPrices, FetchError> {
        let stock_lookup = async {
            match stock {
                StockInput::LiteralPrice(price) => {
                    debug!(price = %price, "Using literal stock price");
                    Ok((*price, None))
                }
                StockInput::Symbol(symbol) => {
                    info!(
                        symbol = %symbol,
                        source = self.quotes.source_name(),
                        "Looking up stock"
                    );
                    self.quotes
                        .quote(symbol)
                        .await
                        .map(|quote| (quote.price, Some(quote)))
                }
            }
        };

        let rate_lookup = async {
            match currency {
                CurrencyChoice::Usd => Ok(Decimal::ONE),
                CurrencyChoice::Code(code) => {
                    info!(
                        code = %code,
                        source = self.rates.source_name(),
                        "Looking up currency"
                    );
                    self.rates.usd_rate(code).await
                }
            }
        };

        let ((stock_price, quote), currency_rate) = tokio::try_join!(stock_lookup, rate_lookup)?;

        Ok(ResolvedPrices {
            stock_price,
            currency_rate,
            quote,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::testkit::domain::usd_quote;
    use crate::testkit::sources::{StaticQuotes, StaticRates};
    use rust_decimal_macros::dec;

    fn resolver(quotes: &Arc<StaticQuotes>, rates: &Arc<StaticRates>) -> PriceResolver {
        PriceResolver::new(quotes.clone(), rates.clone())
    }

    #[tokio::test]
    async fn literal_price_and_usd_skip_lookups() {
        let quotes = Arc::new(StaticQuotes::failing(FetchError::InvalidStockSymbol));
        let rates = Arc::new(StaticRates::failing(FetchError::InvalidCurrency));

        let resolved = resolver(&quotes, &rates)
            .resolve(&StockInput::LiteralPrice(dec!(42)), &CurrencyChoice::Usd)
            .await
            .expect("no lookups needed");

        assert_eq!(resolved.stock_price, dec!(42));
        assert_eq!(resolved.currency_rate, Decimal::ONE);
        assert!(resolved.quote.is_none());
        assert_eq!(quotes.calls(), 0);
        assert_eq!(rates.calls(), 0);
    }

    #[tokio::test]
    async fn symbol_and_code_are_looked_up() {
        let quotes = Arc::new(StaticQuotes::ok(usd_quote("AAPL", dec!(190))));
        let rates = Arc::new(StaticRates::ok(dec!(0.5)));

        let resolved = resolver(&quotes, &rates)
            .resolve(
                &StockInput::Symbol("aapl".into()),
                &CurrencyChoice::Code("eur".into()),
            )
            .await
            .expect("resolved");

        assert_eq!(resolved.stock_price, dec!(190));
        assert_eq!(resolved.currency_rate, dec!(0.5));
        assert_eq!(quotes.symbols(), vec!["aapl".to_string()]);
        assert_eq!(rates.calls(), 1);
    }

    #[tokio::test]
    async fn any_failure_fails_the_join() {
        let quotes = Arc::new(StaticQuotes::ok(usd_quote("AAPL", dec!(190))));
        let rates = Arc::new(StaticRates::failing(FetchError::InvalidCurrency));

        let result = resolver(&quotes, &rates)
            .resolve(
                &StockInput::Symbol("AAPL".into()),
                &CurrencyChoice::Code("xyz".into()),
            )
            .await;

        assert_eq!(result, Err(FetchError::InvalidCurrency));
    }

    #[tokio::test]
    async fn first_failure_to_arrive_wins() {
        let quotes = Arc::new(
            StaticQuotes::failing(FetchError::InvalidStockSymbol)
                .delayed(Duration::from_millis(200)),
        );
        let rates = Arc::new(StaticRates::failing(FetchError::UnexpectedCurrencyResponse));

        let result = resolver(&quotes, &rates)
            .resolve(
                &StockInput::Symbol("NOPE".into()),
                &CurrencyChoice::Code("eur".into()),
            )
            .await;

        assert_eq!(result, Err(FetchError::UnexpectedCurrencyResponse));
    }

    #[tokio::test]
    async fn lookups_run_concurrently() {
        let quotes = Arc::new(
            StaticQuotes::ok(usd_quote("AAPL", dec!(100))).delayed(Duration::from_millis(300)),
        );
        let rates = Arc::new(StaticRates::ok(dec!(2)).delayed(Duration::from_millis(300)));

        let started = Instant::now();
        resolver(&quotes, &rates)
            .resolve(
                &StockInput::Symbol("AAPL".into()),
                &CurrencyChoice::Code("gbp".into()),
            )
            .await
            .expect("resolved");

        assert!(started.elapsed() < Duration::from_millis(550));
    }
}
