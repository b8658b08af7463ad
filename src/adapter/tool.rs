//! One remote tool wrapped as a [`Tool`].

use super::AdapterError;
use crate::client::{ClientError, McpClient};
use crate::context::CallContext;
use crate::tools::{Tool, ToolError};
use crate::types::{CallToolRequest, CallToolResult, Content, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-call timeout used when nothing else is configured.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Text placed between the tool description and its rendered schema.
pub const SCHEMA_SEPARATOR: &str = "\n The input schema is: ";

/// Prefix of every diagnostic returned in place of a tool result.
pub const ERROR_PREFIX: &str = "call the tool error: ";

/// Output returned when the model's input is not a JSON object.
pub const INVALID_INPUT_MESSAGE: &str =
    "call the tool error: input must be valid json, retry tool calling with correct json";

/// A remote tool frozen at listing time.
///
/// Borrows the client from the [`McpAdapter`](super::McpAdapter) that listed
/// it, so it cannot outlive the adapter.
pub struct McpTool<'a, C: ?Sized> {
    name: String,
    description: String,
    input_schema: String,
    parameters: Value,
    client: &'a C,
    timeout: Duration,
}

impl<'a, C: McpClient + ?Sized> McpTool<'a, C> {
    /// Wrap `descriptor`, rendering its schema once.
    pub fn new(
        descriptor: ToolDescriptor,
        client: &'a C,
        timeout: Duration,
    ) -> Result<Self, AdapterError> {
        let marshal_err = |source| AdapterError::MarshalSchema {
            tool: descriptor.name.clone(),
            source,
        };
        let input_schema =
            serde_json::to_string(&descriptor.input_schema.properties).map_err(marshal_err)?;
        let parameters = serde_json::to_value(&descriptor.input_schema).map_err(marshal_err)?;
        let description = format!(
            "{}{}{}",
            descriptor.description, SCHEMA_SEPARATOR, input_schema
        );

        Ok(Self {
            name: descriptor.name,
            description,
            input_schema,
            parameters,
            client,
            timeout,
        })
    }

    /// Canonical JSON of the schema's property map.
    pub fn input_schema(&self) -> &str {
        &self.input_schema
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<C: ?Sized> fmt::Debug for McpTool<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpTool")
            .field("name", &self.name)
            .field("input_schema", &self.input_schema)
            .field("client", &"<McpClient>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl<'a, C: McpClient + ?Sized> Tool for McpTool<'a, C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Value {
        self.parameters.clone()
    }

    async fn call(&self, ctx: &CallContext, input: &str) -> Result<String, ToolError> {
        match ctx.check() {
            Ok(()) => {}
            Err(ClientError::Cancelled) => return Err(ToolError::Cancelled),
            Err(_) => return Err(ToolError::DeadlineExceeded),
        }

        let (scope, _guard) = ctx.scoped(self.timeout);

        let arguments: Map<String, Value> = match serde_json::from_str(input) {
            Ok(arguments) => arguments,
            Err(e) => {
                debug!("Rejected input for tool '{}': {}", self.name, e);
                return Ok(INVALID_INPUT_MESSAGE.to_string());
            }
        };

        let request = CallToolRequest {
            name: self.name.clone(),
            arguments,
        };

        match scope.run(self.client.call_tool(&scope, request)).await {
            Ok(result) => Ok(render_result(&self.name, result)),
            Err(e) => {
                warn!("Tool '{}' call failed: {}", self.name, e);
                Ok(format!("{ERROR_PREFIX}{e}"))
            }
        }
    }
}

/// Turn a remote result into the text handed back to the agent.
fn render_result(name: &str, result: CallToolResult) -> String {
    if result.is_error() {
        let detail = result
            .content
            .iter()
            .find_map(Content::as_text)
            .unwrap_or("tool reported an error");
        warn!("Tool '{}' reported an error: {}", name, detail);
        return format!("{ERROR_PREFIX}{detail}");
    }

    match result.content.into_iter().next() {
        Some(Content::Text { text }) => text,
        Some(other) => {
            warn!("Tool '{}' returned {} content", name, other.kind());
            format!("{ERROR_PREFIX}unsupported content type {}", other.kind())
        }
        None => format!("{ERROR_PREFIX}tool returned no content"),
    }
}
