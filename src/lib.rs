//! Vestcalc - equity compensation calculator for RSU and ESO grants.
//!
//! Turns a stock price (or a ticker symbol to look up), monthly RSU and ESO
//! grant counts, an ESO strike price, and an optional target currency into
//! monthly and yearly compensation, plus a sensitivity series across a band
//! of stock prices.
//!
//! # Architecture
//!
//! - [`domain`] - Pure formula, validation, form state, and money formatting
//! - [`port`] - Quote and currency rate source traits
//! - [`adapter`] - CLI and HTTP inbound adapters, API clients outbound
//! - [`application`] - The compensation use case and concurrent price lookup
//! - [`infrastructure`] - Configuration, logging, and adapter wiring
//!
//! # Example
//!
//! ```no_run
//! use vestcalc::domain::form::FormFields;
//! use vestcalc::infrastructure::bootstrap;
//! use vestcalc::infrastructure::config::settings::Config;
//!
//! # async fn run() -> vestcalc::error::Result<()> {
//! let service = bootstrap::build_compensation_service(&Config::default());
//! let fields = FormFields::from_query("stock=AAPL&rsu=10&currency=eur");
//! let report = service.calculate(&fields, false).await?;
//! println!("{} {} per year", report.output.per_year, report.currency);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
