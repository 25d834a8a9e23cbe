//! Handler for the `config` command group, plus config resolution shared
//! by the other commands.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::diagnostic::{self, ConfigDiagnostic};
use super::{output, paths};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Resolve the configuration for a command.
///
/// An explicit path must exist. Without one, `~/.vestcalc/config.toml` is
/// used when present and the built-in defaults otherwise.
#[allow(clippy::result_large_err)]
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = paths::default_config();
            if path.exists() {
                load_file(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Load a config file, rendering TOML syntax errors with their location.
#[allow(clippy::result_large_err)]
fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let result = Config::parse_toml(&content);
    if let Err(Error::Config(ConfigError::Parse(err))) = &result {
        if !output::is_json() {
            if let Some(diag) = ConfigDiagnostic::from_toml(path, &content, err) {
                diagnostic::emit(diag);
            }
        }
    }
    result
}

/// Execute `config init`.
#[allow(clippy::result_large_err)]
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: vestcalc config validate -c {}",
        path.display()
    ));
    output::note("3. Run: vestcalc calc --stock AAPL --rsu 10");
    Ok(())
}

/// Execute `config show`. A missing file shows the defaults.
#[allow(clippy::result_large_err)]
pub fn execute_show(path: &Path) -> Result<()> {
    let from_file = path.exists();
    let config = if from_file {
        load_file(path)?
    } else {
        Config::default()
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "fromFile": from_file,
            "config": {
                "logging": {
                    "level": config.logging.level,
                    "format": config.logging.format,
                },
                "quote": {
                    "api_url": config.quote.api_url,
                    "upstream_url": config.quote.upstream_url,
                    "require_usd": config.quote.require_usd,
                },
                "currency": { "api_url": config.currency.api_url },
                "http": {
                    "timeout_ms": config.http.timeout_ms,
                    "user_agent": config.http.user_agent,
                },
                "server": {
                    "bind": config.server.bind,
                    "port": config.server.port,
                    "cache_ttl_seconds": config.server.cache_ttl_seconds,
                },
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !from_file {
        output::note("(file not found, showing defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Quotes");
    output::field("API", &config.quote.api_url);
    output::field("Upstream", &config.quote.upstream_url);
    output::field("USD only", config.quote.require_usd);

    output::section("Currency");
    output::field("API", &config.currency.api_url);

    output::section("HTTP");
    output::field(
        "Timeout",
        config
            .http
            .timeout_ms
            .map_or_else(|| output::muted("none"), |ms| format!("{ms}ms")),
    );
    output::field("User agent", &config.http.user_agent);

    output::section("Server");
    output::field("Address", config.server.address());
    output::field("Cache TTL", format!("{}s", config.server.cache_ttl_seconds));
    Ok(())
}

/// Execute `config validate`. The file must exist.
#[allow(clippy::result_large_err)]
pub fn execute_validate(path: &Path) -> Result<()> {
    load_file(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Path", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(config.server.port, 3000);
        assert!(config.quote.require_usd);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).expect("first init");
        assert!(path.exists());
        assert!(execute_init(&path, false).is_err());
        execute_init(&path, true).expect("forced init");
    }
}
