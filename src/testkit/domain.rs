//! Builders for domain values used across tests.

use rust_decimal::Decimal;

use crate::domain::form::FormFields;
use crate::domain::quote::Quote;

/// Form fields with every value given positionally.
pub fn fields(stock: &str, rsu: &str, eso: &str, strike_price: &str, currency: &str) -> FormFields {
    FormFields {
        stock: stock.to_string(),
        rsu: rsu.to_string(),
        eso: eso.to_string(),
        strike_price: strike_price.to_string(),
        currency: currency.to_string(),
    }
}

/// A USD quote for `symbol`.
pub fn usd_quote(symbol: &str, price: Decimal) -> Quote {
    Quote {
        symbol: symbol.to_ascii_uppercase(),
        price,
        currency: Some("USD".to_string()),
    }
}
