//! Chart-style stock quote API adapter.
//!
//! Speaks the `/{SYMBOL}` → `{chart:{result:[{meta:{..}}]}}` protocol, which
//! both the public quote API and this crate's own proxy serve.

pub mod client;
pub mod dto;

pub use client::ChartQuoteClient;
