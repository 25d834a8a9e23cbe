//! Stock and currency input resolution.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::ValidationError;
use super::money::USD;
use super::number::{is_present, parse_number, NumberError};

/// What the stock field asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockInput {
    /// A price entered directly; no lookup needed.
    LiteralPrice(Decimal),
    /// A ticker symbol to look up.
    Symbol(String),
}

impl StockInput {
    /// Interpret the raw stock field.
    ///
    /// A blank field is the literal price 0. A non-negative number is a
    /// literal price. Anything else is a symbol. A price too large to
    /// represent is [`ValidationError::TooLarge`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !is_present(raw) {
            return Ok(Self::LiteralPrice(Decimal::ZERO));
        }
        match parse_number(raw) {
            Ok(price) if !price.is_sign_negative() || price.is_zero() => {
                Ok(Self::LiteralPrice(price))
            }
            Err(NumberError::OutOfRange { negative: false }) => Err(ValidationError::TooLarge),
            _ => Ok(Self::Symbol(raw.trim().to_string())),
        }
    }
}

/// Target currency for the outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyChoice {
    /// No conversion; rate is 1.
    Usd,
    /// Convert from USD into this lowercase currency code.
    Code(String),
}

impl CurrencyChoice {
    /// Interpret the raw currency field. Blank or `usd` (any case) means USD.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_ascii_lowercase();
        if code.is_empty() || code == "usd" {
            Self::Usd
        } else {
            Self::Code(code)
        }
    }

    /// Uppercase display code.
    #[must_use]
    pub fn display_code(&self) -> String {
        match self {
            Self::Usd => USD.to_string(),
            Self::Code(code) => code.to_ascii_uppercase(),
        }
    }
}

/// A market quote as returned by a quote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: Decimal,
    /// Native currency of the quote, when the source reports one.
    pub currency: Option<String>,
}
