//! Path utilities for vestcalc.
//!
//! All data lives under `~/.vestcalc/`:
//! - `~/.vestcalc/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the vestcalc home directory (`~/.vestcalc/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vestcalc")
}

/// Returns the default config file path (`~/.vestcalc/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
