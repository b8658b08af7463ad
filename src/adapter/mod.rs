//! Adapter from an MCP client to agent tools.
//!
//! [`McpAdapter::new`] runs the handshake; [`McpAdapter::list_tools`] fetches
//! the server's catalog and wraps every entry as an [`McpTool`].
//!
//! ```ignore
//! let adapter = McpAdapter::new(client, AdapterConfig::default()).await?;
//! for tool in adapter.list_tools().await? {
//!     let out = tool.call(&CallContext::background(), r#"{"url":"https://example.com"}"#).await?;
//! }
//! ```

pub mod error;
pub mod tool;

pub use error::AdapterError;
pub use tool::{McpTool, DEFAULT_TOOL_TIMEOUT, INVALID_INPUT_MESSAGE};

use crate::client::McpClient;
use crate::config::AdapterConfig;
use crate::context::CallContext;
use crate::tools::Tool;
use crate::types::{Implementation, InitializeRequest, InitializeResult, SUPPORTED_PROTOCOL_VERSIONS};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// An initialized MCP client plus the settings applied to its tools.
pub struct McpAdapter<C> {
    client: C,
    config: AdapterConfig,
    server: InitializeResult,
}

impl<C> fmt::Debug for McpAdapter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpAdapter")
            .field("server", &self.server.server_info)
            .field("protocol_version", &self.server.protocol_version)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: McpClient> McpAdapter<C> {
    /// Take ownership of a connected client and perform the handshake.
    pub async fn new(client: C, config: AdapterConfig) -> Result<Self, AdapterError> {
        let ctx = CallContext::with_timeout(config.tool_timeout());
        let server = ctx
            .run(client.initialize(&ctx, InitializeRequest::default()))
            .await
            .map_err(AdapterError::Initialize)?;

        if !SUPPORTED_PROTOCOL_VERSIONS.contains(&server.protocol_version.as_str()) {
            return Err(AdapterError::UnsupportedProtocolVersion(
                server.protocol_version,
            ));
        }

        debug!(
            name = %server.server_info.name,
            version = %server.server_info.version,
            protocol = %server.protocol_version,
            "Initialized with server"
        );

        Ok(Self {
            client,
            config,
            server,
        })
    }

    /// Handshake with the default configuration.
    pub async fn with_defaults(client: C) -> Result<Self, AdapterError> {
        Self::new(client, AdapterConfig::default()).await
    }

    /// Fetch the current catalog and wrap each tool, in server order.
    ///
    /// Nothing is cached; every call asks the server again.
    pub async fn list_tools(&self) -> Result<Vec<McpTool<'_, C>>, AdapterError> {
        let timeout = self.config.tool_timeout();
        let ctx = CallContext::with_timeout(timeout);
        let listing = ctx
            .run(self.client.list_tools(&ctx))
            .await
            .map_err(AdapterError::ListTools)?;

        let mut tools = Vec::with_capacity(listing.tools.len());
        for descriptor in listing.tools {
            debug!(
                name = %descriptor.name,
                description = %descriptor.description,
                "tool"
            );
            tools.push(McpTool::new(descriptor, &self.client, timeout)?);
        }

        Ok(tools)
    }

    /// Same as [`list_tools`](Self::list_tools), boxed for mixing with other
    /// tool implementations.
    pub async fn tools<'a>(&'a self) -> Result<Vec<Box<dyn Tool + 'a>>, AdapterError>
    where
        C: 'a,
    {
        Ok(self
            .list_tools()
            .await?
            .into_iter()
            .map(|t| Box::new(t) as Box<dyn Tool + 'a>)
            .collect())
    }

    /// Identity the server reported during the handshake.
    pub fn server_info(&self) -> &Implementation {
        &self.server.server_info
    }

    /// Protocol version agreed during the handshake.
    pub fn protocol_version(&self) -> &str {
        &self.server.protocol_version
    }

    /// Usage instructions the server sent, if any.
    pub fn instructions(&self) -> Option<&str> {
        self.server.instructions.as_deref()
    }

    /// Timeout applied to listing and to every wrapper produced.
    pub fn tool_timeout(&self) -> Duration {
        self.config.tool_timeout()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Give the client back, ending every borrow held by wrappers.
    pub fn into_inner(self) -> C {
        self.client
    }
}
