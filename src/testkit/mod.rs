//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`sources`] - In-memory [`QuoteSource`](crate::port::QuoteSource) and
//!   [`RateSource`](crate::port::RateSource) fakes with canned answers,
//!   optional latency, and call counters.
//! - [`domain`] - Builders for form fields and quotes.

pub mod domain;
pub mod sources;
