//! Domain errors surfaced to the person running a calculation.
//!
//! Both enums render as the fixed, human-readable messages shown in place of
//! results. Neither carries a structured code: the message is the contract.
//!
//! # Examples
//!
//! ```
//! use vestcalc::domain::error::ValidationError;
//!
//! assert_eq!(ValidationError::InvalidRsu.to_string(), "Invalid RSUs value");
//! ```

use thiserror::Error;

/// Input validation failures, checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The RSU field is present but not a non-negative number.
    #[error("Invalid RSUs value")]
    InvalidRsu,

    /// The ESO field is present but not a non-negative number.
    #[error("Invalid ESOs value")]
    InvalidEso,

    /// The strike price field is present but not a non-negative number.
    #[error("Invalid strike price value")]
    InvalidStrikePrice,

    /// ESOs were entered without a strike price.
    #[error("If you have ESOs you must enter a strike price")]
    MissingStrikePrice,

    /// A value, or a result computed from the values, exceeds what can be
    /// represented.
    #[error("Values are too large to calculate")]
    TooLarge,
}

/// Failures from the stock quote or currency rate lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The quote API answered with a non-success status.
    #[error("Invalid stock symbol")]
    InvalidStockSymbol,

    /// The quote API was unreachable or its body lacked a numeric price.
    #[error("Unexpected response from stock API")]
    UnexpectedStockResponse,

    /// The quote is denominated in something other than USD.
    #[error("Non USD stocks are not supported yet")]
    NonUsdStock,

    /// The currency API answered with a non-success status.
    #[error("Invalid currency")]
    InvalidCurrency,

    /// The currency API was unreachable or lacked a numeric rate.
    #[error("Unexpected response from currency API")]
    UnexpectedCurrencyResponse,
}

impl FetchError {
    /// True for errors originating from the stock quote lookup.
    #[must_use]
    pub const fn is_stock(&self) -> bool {
        matches!(
            self,
            Self::InvalidStockSymbol | Self::UnexpectedStockResponse | Self::NonUsdStock
        )
    }
}

/// Either failure class a single calculation attempt can end in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
