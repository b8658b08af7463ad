pub mod schema;

pub use schema::{AdapterConfig, MIN_TOOL_TIMEOUT_MS};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<AdapterConfig> {
    if !path.exists() {
        return Ok(AdapterConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read adapter config {}", path.display()))?;
    let config: AdapterConfig =
        toml::from_str(&contents).context("Failed to parse adapter config (TOML)")?;
    if config.tool_timeout_ms < MIN_TOOL_TIMEOUT_MS {
        warn!(
            "tool_timeout_ms = {} raised to {}",
            config.tool_timeout_ms, MIN_TOOL_TIMEOUT_MS
        );
    }

    let timeout = config.tool_timeout();
    Ok(config.with_tool_timeout(timeout))
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &AdapterConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}
