//! Infrastructure concerns: configuration, logging setup, and adapter wiring.

pub mod bootstrap;
pub mod config;
