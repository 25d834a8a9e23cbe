//! Pure compensation domain: formula, validation, form state, formatting.
//!
//! Nothing here performs I/O. Network lookups live behind the ports in
//! [`crate::port`].

pub mod compensation;
pub mod error;
pub mod form;
pub mod money;
pub mod number;
pub mod quote;
pub mod sensitivity;
pub mod validation;

pub use compensation::{calculate, CompensationInput, CompensationOutput};
pub use error::{CalculationError, FetchError, ValidationError};
pub use form::{FieldId, FormFields};
pub use money::{default_fraction_digits, format_amount, format_money, format_thousands, Amount};
pub use quote::{CurrencyChoice, Quote, StockInput};
pub use sensitivity::SensitivityPoint;
pub use validation::{validate, ValidatedGrants};
