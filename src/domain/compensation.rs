//! Compensation formula for monthly RSU and ESO grants.
//!
//! RSUs are valued at the full market price. ESOs are valued at intrinsic
//! value, floored at zero so an underwater option never subtracts from the
//! total. Every value is multiplied by the currency rate, so outputs are in
//! the target currency. Arithmetic is checked: a result that does not fit a
//! Decimal is [`ValidationError::TooLarge`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::ValidationError;
use super::money::Amount;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Inputs to a single calculation. All fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompensationInput {
    /// Market price of one share, in USD.
    pub stock_price: Decimal,
    /// RSUs vesting per month.
    pub rsu_per_month: Decimal,
    /// ESOs vesting per month.
    pub eso_per_month: Decimal,
    /// Exercise price of the options, in USD.
    pub strike_price: Decimal,
    /// USD to target currency multiplier (1 when no conversion is requested).
    pub currency_rate: Decimal,
}

/// Monetary results, in target currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationOutput {
    pub rsu_value_per_month: Amount,
    pub eso_value_per_month: Amount,
    pub per_month: Amount,
    pub rsu_value_per_year: Amount,
    pub eso_value_per_year: Amount,
    pub per_year: Amount,
}

/// Compute monthly and yearly compensation values.
pub fn calculate(input: &CompensationInput) -> Result<CompensationOutput, ValidationError> {
    checked_calculate(input).ok_or(ValidationError::TooLarge)
}

fn checked_calculate(input: &CompensationInput) -> Option<CompensationOutput> {
    let rsu_value_per_month = input
        .currency_rate
        .checked_mul(input.rsu_per_month)?
        .checked_mul(input.stock_price)?;
    let eso_value_per_month = input
        .currency_rate
        .checked_mul(input.eso_per_month)?
        .checked_mul(input.stock_price.checked_sub(input.strike_price)?)?
        .max(Decimal::ZERO);
    let per_month = rsu_value_per_month.checked_add(eso_value_per_month)?;

    Some(CompensationOutput {
        rsu_value_per_month,
        eso_value_per_month,
        per_month,
        rsu_value_per_year: MONTHS_PER_YEAR.checked_mul(rsu_value_per_month)?,
        eso_value_per_year: MONTHS_PER_YEAR.checked_mul(eso_value_per_month)?,
        per_year: MONTHS_PER_YEAR.checked_mul(per_month)?,
    })
}
