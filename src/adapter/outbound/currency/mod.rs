//! Per-USD currency conversion API adapter.

pub mod client;

pub use client::CurrencyRateClient;
