//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod calculator;
pub mod fetcher;

pub use calculator::{CompensationReport, CompensationService};
pub use fetcher::{PriceResolver, ResolvedPrices};
