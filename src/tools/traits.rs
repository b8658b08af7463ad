//! Tool trait definition: the contract an agent loop drives.

use crate::context::CallContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Definition of a tool exposed to the inference model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Unrecoverable tool failure.
///
/// Bad input and remote failures are reported as text output, not as
/// `ToolError`; only a context that is spent before the call starts lands
/// here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("call cancelled before it started")]
    Cancelled,

    #[error("deadline exceeded before the call started")]
    DeadlineExceeded,
}

/// A callable tool with a text-in, text-out contract.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (used in function calls).
    fn name(&self) -> &str;

    /// Human-readable description, including anything a text-only agent
    /// needs to know about the expected input.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Run the tool on raw model output.
    async fn call(&self, ctx: &CallContext, input: &str) -> Result<String, ToolError>;

    /// Function-calling payload for this tool.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
