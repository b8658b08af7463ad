//! MCP tool adapter — use tools served over the Model Context Protocol as
//! ordinary agent tools.
//!
//! An [`McpAdapter`] performs the handshake with a connected [`McpClient`]
//! and turns each tool the server advertises into an [`McpTool`]. Calling a
//! wrapper forwards the model's JSON input to the server; bad input and
//! remote failures come back as text so an agent loop can retry instead of
//! aborting.

pub mod adapter;
pub mod client;
pub mod config;
pub mod context;
pub mod tools;
pub mod types;

pub use adapter::{AdapterError, McpAdapter, McpTool};
pub use client::{ClientError, McpClient};
pub use config::AdapterConfig;
pub use context::CallContext;
pub use tools::{Tool, ToolDefinition, ToolError};
