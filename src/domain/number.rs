//! Lenient numeric parsing for form field values.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Shifts past this many decimal places always overflow or round to zero.
const MAX_SHIFT: u32 = 64;

/// Why a form value could not be read as a number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// Blank, or not a decimal literal.
    #[error("not a number")]
    Malformed,

    /// A well-formed literal whose magnitude does not fit a Decimal.
    #[error("number out of range")]
    OutOfRange { negative: bool },
}

/// Parse a form value as a number.
///
/// Accepts surrounding whitespace, an optional sign, digits with at most one
/// decimal point, and an optional exponent (`1.5e3`, `2E-4`). Exponents too
/// small to represent round to zero; values too large to represent are
/// [`NumberError::OutOfRange`].
pub fn parse_number(raw: &str) -> Result<Decimal, NumberError> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(NumberError::Malformed);
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(NumberError::Malformed);
    }
    let exponent = match exponent {
        Some(raw) => parse_exponent(raw)?,
        None => 0,
    };

    let out_of_range = NumberError::OutOfRange { negative };
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };
    let magnitude = Decimal::from_str(&literal).map_err(|_| out_of_range)?;
    let magnitude = shift(magnitude, exponent).ok_or(out_of_range)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// True when a raw field carries a value.
#[must_use]
pub fn is_present(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn all_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}

/// Signed exponent, saturating at `±MAX_SHIFT`.
fn parse_exponent(raw: &str) -> Result<i64, NumberError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !all_digits(digits) {
        return Err(NumberError::Malformed);
    }
    let magnitude = digits
        .parse::<u32>()
        .map_or(MAX_SHIFT, |value| value.min(MAX_SHIFT));
    let magnitude = i64::from(magnitude);

    Ok(if negative { -magnitude } else { magnitude })
}

/// Multiply by `10^exponent`, or `None` on overflow.
fn shift(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}
