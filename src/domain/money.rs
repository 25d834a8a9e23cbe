//! Monetary types and en-US currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount in some currency, represented as a Decimal for precision.
pub type Amount = Decimal;

/// Currency code used when no conversion is requested.
pub const USD: &str = "USD";

/// Prefix symbols for codes that en-US formatting renders as a symbol.
fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CNY" => Some("CN¥"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "AUD" => Some("A$"),
        "CAD" => Some("CA$"),
        "HKD" => Some("HK$"),
        "NZD" => Some("NZ$"),
        "MXN" => Some("MX$"),
        "TWD" => Some("NT$"),
        "BRL" => Some("R$"),
        "ILS" => Some("₪"),
        "VND" => Some("₫"),
        "PHP" => Some("₱"),
        _ => None,
    }
}

/// Fraction digits en-US formatting shows for a currency by default.
#[must_use]
pub fn default_fraction_digits(code: &str) -> u32 {
    match code.trim().to_ascii_uppercase().as_str() {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "PYG" | "UGX" | "XAF" | "XOF" => 0,
        "BHD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

/// Format an amount with the currency's default fraction digits.
#[must_use]
pub fn format_amount(amount: Amount, code: &str) -> String {
    format_money(amount, code, default_fraction_digits(code))
}

/// Format an amount in the given currency, en-US style.
///
/// Known codes render with their symbol (`$1,234.50`); other codes render
/// with the code and a space (`CHF 1,234.50`). Rounds half away from zero.
#[must_use]
pub fn format_money(amount: Amount, code: &str, fraction_digits: u32) -> String {
    let code = code.trim().to_ascii_uppercase();
    let rounded =
        amount.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = group_thousands(rounded.abs(), fraction_digits);

    match symbol_for(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code} {digits}"),
    }
}

/// Format a yearly amount in thousands with a `k` suffix, no decimals.
#[must_use]
pub fn format_thousands(amount: Amount, code: &str) -> String {
    format!("{}k", format_money(amount / Decimal::ONE_THOUSAND, code, 0))
}

fn group_thousands(value: Decimal, fraction_digits: u32) -> String {
    let mut fixed = value;
    fixed.rescale(fraction_digits);
    let text = fixed.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}
