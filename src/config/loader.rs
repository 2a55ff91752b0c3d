//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LoggingConfig;
use crate::error::LoggingResult;

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> LoggingResult<LoggingConfig> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> LoggingResult<LoggingConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = ?path, threshold = %config.threshold, "logging config loaded");
    Ok(config)
}
