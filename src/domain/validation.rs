//! Grant field validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! RSUs, ESOs, strike price, then the ESO/strike cross-field rule.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::form::FormFields;
use super::number::{is_present, parse_number, NumberError};

/// Grant counts and strike price after validation. Absent fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatedGrants {
    pub rsu_per_month: Decimal,
    pub eso_per_month: Decimal,
    pub strike_price: Decimal,
}

/// Validate the RSU, ESO, and strike price fields.
pub fn validate(fields: &FormFields) -> Result<ValidatedGrants, ValidationError> {
    let rsu_per_month = optional_amount(&fields.rsu, ValidationError::InvalidRsu)?;
    let eso_per_month = optional_amount(&fields.eso, ValidationError::InvalidEso)?;
    let strike_price = optional_amount(&fields.strike_price, ValidationError::InvalidStrikePrice)?;

    if is_present(&fields.eso) && !is_present(&fields.strike_price) {
        return Err(ValidationError::MissingStrikePrice);
    }

    Ok(ValidatedGrants {
        rsu_per_month,
        eso_per_month,
        strike_price,
    })
}

fn optional_amount(raw: &str, invalid: ValidationError) -> Result<Decimal, ValidationError> {
    if !is_present(raw) {
        return Ok(Decimal::ZERO);
    }
    match parse_number(raw) {
        Ok(value) if !value.is_sign_negative() || value.is_zero() => Ok(value),
        Err(NumberError::OutOfRange { negative: false }) => Err(ValidationError::TooLarge),
        _ => Err(invalid),
    }
}
