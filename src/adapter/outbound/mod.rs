//! Outbound adapters (driven side).

pub mod chart;
pub mod currency;
