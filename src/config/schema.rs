//! Configuration schema for the adapter (TOML-friendly).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest per-call timeout, in milliseconds. Zero is raised to this.
pub const MIN_TOOL_TIMEOUT_MS: u64 = 1;

/// Settings applied to the handshake, tool listing, and every produced tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Timeout in milliseconds for each remote call.
    pub tool_timeout_ms: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            tool_timeout_ms: 30_000,
        }
    }
}

impl AdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-call timeout. The last call wins.
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.tool_timeout_ms = millis.max(MIN_TOOL_TIMEOUT_MS);
        self
    }

    /// Effective per-call timeout, never below [`MIN_TOOL_TIMEOUT_MS`].
    pub fn tool_timeout(&self) -> Duration {
        Duration::from_millis(self.tool_timeout_ms.max(MIN_TOOL_TIMEOUT_MS))
    }
}
