//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

/// Supported log output formats.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        self.install(std::io::stdout);
    }

    /// Like [`Self::init`], but writes to stderr so stdout carries only
    /// command output.
    pub fn init_stderr(&self) {
        self.install(std::io::stderr);
    }

    fn install<W>(&self, writer: W)
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| self.configured_filter());
        let builder = fmt().with_env_filter(filter).with_writer(writer);

        match self.format.as_str() {
            "json" => builder.json().init(),
            _ => builder.init(),
        }
    }

    fn configured_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_uses_level_directives() {
        let config = LoggingConfig {
            level: "vestcalc=debug".into(),
            format: "json".into(),
        };

        assert_eq!(config.configured_filter().to_string(), "vestcalc=debug");
    }

    #[test]
    fn defaults_to_pretty_info() {
        let config = LoggingConfig::default();

        assert_eq!(config.level, "info");
        assert!(LOG_FORMATS.contains(&config.format.as_str()));
        assert_eq!(config.configured_filter().to_string(), "info");
    }
}
