//! Compensation use case: validate, fetch, compute.
//!
//! Validation runs before any lookup, so malformed input never costs a
//! network round trip. Every failure ends the attempt; nothing is retried.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::fetcher::PriceResolver;
use crate::domain::compensation::{calculate, CompensationInput, CompensationOutput};
use crate::domain::error::CalculationError;
use crate::domain::form::FormFields;
use crate::domain::quote::{CurrencyChoice, StockInput};
use crate::domain::sensitivity::{self, SensitivityPoint};
use crate::domain::validation::validate;

/// Everything needed to present one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationReport {
    /// The fields the calculation ran with.
    pub fields: FormFields,
    /// Query string reproducing this calculation.
    pub query: String,
    /// Looked-up symbol, or `None` for a literal price.
    pub symbol: Option<String>,
    /// Share price in USD.
    pub stock_price: Decimal,
    /// Uppercase target currency code.
    pub currency: String,
    /// USD to target currency multiplier.
    pub currency_rate: Decimal,
    pub output: CompensationOutput,
    /// Sensitivity series, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SensitivityPoint>>,
}

/// Runs calculations against a [`PriceResolver`].
#[derive(Clone)]
pub struct CompensationService {
    resolver: PriceResolver,
}

impl CompensationService {
    pub fn new(resolver: PriceResolver) -> Self {
        Self { resolver }
    }

    /// Run one calculation for the given raw fields.
    pub async fn calculate(
        &self,
        fields: &FormFields,
        with_series: bool,
    ) -> Result<CompensationReport, CalculationError> {
        let grants = validate(fields)?;
        let stock = StockInput::parse(&fields.stock)?;
        let currency = CurrencyChoice::parse(&fields.currency);
        debug!(?stock, ?currency, ?grants, "Validated inputs");

        let prices = self
            .resolver
            .resolve(&stock, &currency)
            .await
            .inspect_err(|err| {
                let lookup = if err.is_stock() { "stock" } else { "currency" };
                warn!(lookup, error = %err, "Price lookup failed");
            })?;

        let input = CompensationInput {
            stock_price: prices.stock_price,
            rsu_per_month: grants.rsu_per_month,
            eso_per_month: grants.eso_per_month,
            strike_price: grants.strike_price,
            currency_rate: prices.currency_rate,
        };
        let output = calculate(&input).inspect_err(|err| {
            warn!(stock_price = %input.stock_price, error = %err, "Calculation out of range");
        })?;
        let series = with_series.then(|| sensitivity::series(&input));

        info!(
            stock_price = %input.stock_price,
            currency_rate = %input.currency_rate,
            per_month = %output.per_month,
            per_year = %output.per_year,
            "Calculated compensation"
        );

        Ok(CompensationReport {
            fields: fields.clone(),
            query: fields.to_query(),
            symbol: prices.quote.map(|quote| quote.symbol),
            stock_price: input.stock_price,
            currency: currency.display_code(),
            currency_rate: input.currency_rate,
            output,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::error::{FetchError, ValidationError};
    use crate::testkit::domain::{fields, usd_quote};
    use crate::testkit::sources::{StaticQuotes, StaticRates};
    use rust_decimal_macros::dec;

    struct Harness {
        quotes: Arc<StaticQuotes>,
        rates: Arc<StaticRates>,
        service: CompensationService,
    }

    fn harness(quotes: StaticQuotes, rates: StaticRates) -> Harness {
        let quotes = Arc::new(quotes);
        let rates = Arc::new(rates);
        let service = CompensationService::new(PriceResolver::new(quotes.clone(), rates.clone()));
        Harness {
            quotes,
            rates,
            service,
        }
    }

    fn default_harness() -> Harness {
        harness(
            StaticQuotes::ok(usd_quote("AAPL", dec!(50))),
            StaticRates::ok(dec!(2)),
        )
    }

    #[tokio::test]
    async fn literal_price_calculation() {
        let h = default_harness();

        let report = h
            .service
            .calculate(&fields("50", "1", "2", "30", ""), false)
            .await
            .expect("report");

        assert_eq!(report.output.per_month, dec!(90));
        assert_eq!(report.output.per_year, dec!(1080));
        assert_eq!(report.currency, "USD");
        assert_eq!(report.symbol, None);
        assert!(report.series.is_none());
        assert_eq!(h.quotes.calls(), 0);
        assert_eq!(h.rates.calls(), 0);
    }

    #[tokio::test]
    async fn symbol_and_currency_calculation() {
        let h = default_harness();

        let report = h
            .service
            .calculate(&fields("aapl", "2", "", "", "EUR"), true)
            .await
            .expect("report");

        assert_eq!(report.symbol.as_deref(), Some("AAPL"));
        assert_eq!(report.stock_price, dec!(50));
        assert_eq!(report.currency, "EUR");
        assert_eq!(report.currency_rate, dec!(2));
        assert_eq!(report.output.rsu_value_per_month, dec!(200));
        assert_eq!(report.query, "stock=aapl&rsu=2&eso=&strikePrice=&currency=EUR");
        assert!(report.series.is_some_and(|points| !points.is_empty()));
    }

    #[tokio::test]
    async fn validation_failure_skips_network() {
        let h = default_harness();

        let result = h
            .service
            .calculate(&fields("AAPL", "abc", "", "", "eur"), false)
            .await;

        assert_eq!(
            result,
            Err(CalculationError::Validation(ValidationError::InvalidRsu))
        );
        assert_eq!(h.quotes.calls(), 0);
        assert_eq!(h.rates.calls(), 0);
    }

    #[tokio::test]
    async fn missing_strike_price_regardless_of_other_fields() {
        let h = default_harness();

        for stock in ["", "100", "AAPL"] {
            let result = h
                .service
                .calculate(&fields(stock, "5", "3", "", "gbp"), false)
                .await;
            assert_eq!(
                result,
                Err(CalculationError::Validation(
                    ValidationError::MissingStrikePrice
                ))
            );
        }
    }

    #[tokio::test]
    async fn fetch_failure_is_reported() {
        let h = harness(
            StaticQuotes::failing(FetchError::NonUsdStock),
            StaticRates::ok(dec!(1)),
        );

        let result = h
            .service
            .calculate(&fields("SAP.DE", "1", "", "", ""), false)
            .await;

        assert_eq!(result, Err(CalculationError::Fetch(FetchError::NonUsdStock)));
    }

    #[tokio::test]
    async fn huge_grants_are_too_large() {
        let h = default_harness();

        for (stock, rsu) in [("1e10", "1e20"), ("7e27", "2"), ("1e40", "1")] {
            let result = h
                .service
                .calculate(&fields(stock, rsu, "", "", ""), true)
                .await;
            assert_eq!(
                result,
                Err(CalculationError::Validation(ValidationError::TooLarge))
            );
        }
    }

    #[tokio::test]
    async fn quoted_price_times_rate_out_of_range() {
        let price = Decimal::from_scientific("1e20").expect("scientific literal");
        let h = harness(
            StaticQuotes::ok(usd_quote("BIG", price)),
            StaticRates::ok(Decimal::from_scientific("1e10").expect("scientific literal")),
        );

        let result = h
            .service
            .calculate(&fields("BIG", "1", "", "", "jpy"), false)
            .await;

        assert_eq!(
            result,
            Err(CalculationError::Validation(ValidationError::TooLarge))
        );
    }

    #[tokio::test]
    async fn wide_price_band_series_is_capped() {
        let h = default_harness();

        let report = h
            .service
            .calculate(&fields("1000000", "1", "", "", ""), true)
            .await
            .expect("report");

        let series = report.series.expect("series requested");
        assert_eq!(series.len(), 201);
        assert!(series.len() <= sensitivity::MAX_POINTS);
    }

    #[tokio::test]
    async fn report_serializes_for_api_consumers() {
        let h = default_harness();

        let report = h
            .service
            .calculate(&fields("100", "2", "", "", ""), false)
            .await
            .expect("report");
        let json = serde_json::to_value(&report).expect("serialize");

        assert_eq!(json["currency"], "USD");
        assert_eq!(json["output"]["perYear"], "2400");
        assert!(json.get("series").is_none());
        assert_eq!(json["fields"]["strikePrice"], "");
    }
}
