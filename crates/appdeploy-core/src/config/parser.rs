//! TOML parser with helpful error messages

use super::schema::AppEngineConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse appengine.toml with detailed error messages
pub fn parse_appengine_toml(path: &Path) -> Result<AppEngineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_appengine_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse appengine.toml content from string
///
/// `toml` errors already carry line, column and the offending snippet.
pub fn parse_appengine_toml_str(content: &str) -> Result<AppEngineConfig> {
    let config: AppEngineConfig = toml::from_str(content).context("Invalid appengine.toml")?;
    config.validate()?;
    Ok(config)
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &AppEngineConfig) -> Result<String> {
    toml::to_string_pretty(config).with_context(|| "Failed to serialize configuration to TOML")
}
