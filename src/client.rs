//! The MCP client this crate consumes.
//!
//! Connection management, transports and the wire protocol live behind
//! [`McpClient`]; the adapter only needs the three requests below.

use crate::context::CallContext;
use crate::types::{CallToolRequest, CallToolResult, InitializeRequest, InitializeResult, ListToolsResult};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by an MCP client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection or transport failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a JSON-RPC error.
    #[error("server error {code}: {message}")]
    Protocol { code: i32, message: String },

    /// The call did not finish before its deadline.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The call was cancelled by the caller.
    #[error("call cancelled")]
    Cancelled,

    /// A request or response could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Requests the adapter issues against a connected MCP server.
///
/// Implementations must tolerate concurrent calls: every wrapper produced by
/// one adapter shares the same client.
#[async_trait]
pub trait McpClient: Send + Sync {
    /// Perform the `initialize` handshake.
    async fn initialize(
        &self,
        ctx: &CallContext,
        request: InitializeRequest,
    ) -> Result<InitializeResult, ClientError>;

    /// Fetch the server's tool catalog.
    async fn list_tools(&self, ctx: &CallContext) -> Result<ListToolsResult, ClientError>;

    /// Invoke one tool.
    async fn call_tool(
        &self,
        ctx: &CallContext,
        request: CallToolRequest,
    ) -> Result<CallToolResult, ClientError>;
}

#[async_trait]
impl<C: McpClient + ?Sized> McpClient for Arc<C> {
    async fn initialize(
        &self,
        ctx: &CallContext,
        request: InitializeRequest,
    ) -> Result<InitializeResult, ClientError> {
        (**self).initialize(ctx, request).await
    }

    async fn list_tools(&self, ctx: &CallContext) -> Result<ListToolsResult, ClientError> {
        (**self).list_tools(ctx).await
    }

    async fn call_tool(
        &self,
        ctx: &CallContext,
        request: CallToolRequest,
    ) -> Result<CallToolResult, ClientError> {
        (**self).call_tool(ctx, request).await
    }
}
