//! Infrastructure configuration modules.

pub mod http;
pub mod logging;
pub mod market;
pub mod server;
pub mod settings;

pub use settings::Config;
