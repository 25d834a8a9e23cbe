//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The application layer talks to the outside world only through these
//! traits, so orchestration can be exercised with in-memory fakes.
//!
//! ```text
//!                ┌──────────────────────────┐
//!                │       Application        │
//!                │  PriceResolver, Service  │
//!                └────────────┬─────────────┘
//!                             │
//!             ┌───────────────┴───────────────┐
//!             ▼                               ▼
//!      ┌─────────────┐                 ┌─────────────┐
//!      │ QuoteSource │                 │ RateSource  │
//!      │   Adapter   │                 │   Adapter   │
//!      └─────────────┘                 └─────────────┘
//! ```

pub mod outbound;

pub use outbound::market::{QuoteSource, RateSource};
