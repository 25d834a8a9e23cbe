//! Chart API response types.
//!
//! Only the fields the calculator reads are modelled; everything else in the
//! (large) upstream payload is ignored.
//!
//! Example body:
//! ```json
//! {"chart":{"result":[{"meta":{"currency":"USD","symbol":"AAPL","regularMarketPrice":187.44}}],"error":null}}
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::FetchError;
use crate::domain::money::USD;
use crate::domain::quote::Quote;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Left untyped so a string or null price is a shape error, not a
    /// deserialization failure of the whole body.
    #[serde(default)]
    pub regular_market_price: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Extract a quote from a chart response body.
///
/// The price must be a positive number. With `require_usd`, the quote's
/// native currency must be `USD`.
pub fn parse_chart_quote(
    symbol: &str,
    body: &Value,
    require_usd: bool,
) -> Result<Quote, FetchError> {
    let response =
        ChartResponse::deserialize(body).map_err(|_| FetchError::UnexpectedStockResponse)?;

    let meta = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .map(|result| result.meta)
        .ok_or(FetchError::UnexpectedStockResponse)?;

    let price = meta
        .regular_market_price
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|price| price.is_finite() && *price > 0.0)
        .and_then(|price| Decimal::try_from(price).ok())
        .ok_or(FetchError::UnexpectedStockResponse)?;

    if require_usd && meta.currency.as_deref() != Some(USD) {
        return Err(FetchError::NonUsdStock);
    }

    Ok(Quote {
        symbol: symbol.to_ascii_uppercase(),
        price,
        currency: meta.currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn body(price: Value, currency: Value) -> Value {
        json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": currency,
                        "symbol": "AAPL",
                        "regularMarketPrice": price,
                    }
                }],
                "error": null
            }
        })
    }

    #[test]
    fn parses_usd_quote() {
        let quote = parse_chart_quote("aapl", &body(json!(187.25), json!("USD")), true)
            .expect("valid quote");

        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(187.25));
        assert_eq!(quote.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn rejects_non_usd_when_strict() {
        let result = parse_chart_quote("SAP.DE", &body(json!(120.5), json!("EUR")), true);
        assert_eq!(result, Err(FetchError::NonUsdStock));
    }

    #[test]
    fn accepts_non_usd_when_lenient() {
        let quote = parse_chart_quote("SAP.DE", &body(json!(120.5), json!("EUR")), false)
            .expect("lenient");
        assert_eq!(quote.price, dec!(120.5));
    }

    #[test]
    fn missing_currency_is_not_usd() {
        let result = parse_chart_quote("X", &body(json!(10), Value::Null), true);
        assert_eq!(result, Err(FetchError::NonUsdStock));
    }

    #[test]
    fn non_numeric_or_zero_price_is_unexpected() {
        for price in [json!("187.25"), Value::Null, json!(0), json!(-3.5)] {
            let result = parse_chart_quote("AAPL", &body(price, json!("USD")), true);
            assert_eq!(result, Err(FetchError::UnexpectedStockResponse));
        }
    }

    #[test]
    fn malformed_shapes_are_unexpected() {
        let shapes = [
            json!({}),
            json!({"chart": {"result": null, "error": {"code": "Not Found"}}}),
            json!({"chart": {"result": []}}),
            json!({"chart": {"result": [{}]}}),
            json!([1, 2, 3]),
        ];
        for shape in shapes {
            assert_eq!(
                parse_chart_quote("AAPL", &shape, true),
                Err(FetchError::UnexpectedStockResponse)
            );
        }
    }
}
