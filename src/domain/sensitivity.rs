//! Sensitivity of yearly compensation to the stock price.
//!
//! Re-runs the formula over a band around the quoted price, from half to one
//! and a half times the price, rounded outward to multiples of 10 and
//! sampled every 5 units. Wide bands sample every 50, 500, and so on, so a
//! series never exceeds [`MAX_POINTS`]. Points whose values do not fit a
//! Decimal end the series.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::compensation::{calculate, CompensationInput};
use super::money::Amount;

/// Largest number of points in one series.
pub const MAX_POINTS: usize = 500;

const BAND_LOW: Decimal = dec!(0.5);
const BAND_HIGH: Decimal = dec!(1.5);
const ROUNDING: Decimal = dec!(10);
const INTERVAL: Decimal = dec!(5);
const INTERVAL_GROWTH: Decimal = dec!(10);

/// Yearly values at one hypothetical stock price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub stock_price: Decimal,
    pub rsu_per_year: Amount,
    pub eso_per_year: Amount,
    pub total_per_year: Amount,
}

/// Price grid for a quoted price: `(min, max)` bounds, inclusive.
///
/// `None` when the band does not fit a Decimal.
#[must_use]
pub fn price_bounds(price: Decimal) -> Option<(Decimal, Decimal)> {
    let min = BAND_LOW
        .checked_mul(price)?
        .checked_div(ROUNDING)?
        .floor()
        .checked_mul(ROUNDING)?;
    let max = BAND_HIGH
        .checked_mul(price)?
        .checked_div(ROUNDING)?
        .ceil()
        .checked_mul(ROUNDING)?;
    Some((min, max))
}

/// Sampling interval for a band: 5, widened tenfold until the band holds at
/// most [`MAX_POINTS`] points.
#[must_use]
pub fn price_step(min: Decimal, max: Decimal) -> Option<Decimal> {
    let span = max.checked_sub(min)?;
    let limit = Decimal::from(MAX_POINTS);
    let mut step = INTERVAL;
    while span.checked_div(step)? >= limit {
        step = step.checked_mul(INTERVAL_GROWTH)?;
    }
    Some(step)
}

/// Evaluate the formula across the price band around `base.stock_price`.
#[must_use]
pub fn series(base: &CompensationInput) -> Vec<SensitivityPoint> {
    let Some((min, max)) = price_bounds(base.stock_price) else {
        return Vec::new();
    };
    let Some(step) = price_step(min, max) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut next = Some(min);
    while let Some(price) = next.filter(|price| *price <= max) {
        let Ok(out) = calculate(&CompensationInput {
            stock_price: price,
            ..*base
        }) else {
            break;
        };
        points.push(SensitivityPoint {
            stock_price: price,
            rsu_per_year: out.rsu_value_per_year,
            eso_per_year: out.eso_value_per_year,
            total_per_year: out.per_year,
        });
        next = price.checked_add(step);
    }

    points
}
