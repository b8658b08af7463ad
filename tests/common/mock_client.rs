//! In-memory MCP client for adapter tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use mcp_tool_adapter::types::*;
use mcp_tool_adapter::{CallContext, ClientError, McpClient};

/// How the mock answers `tools/call` for one tool.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return this result immediately.
    Respond(CallToolResult),
    /// Return the request arguments as JSON text after `delay`.
    Echo { delay: Duration },
    /// Fail with a JSON-RPC error.
    Fail { code: i32, message: String },
    /// Never answer.
    Hang,
}

/// A scripted MCP server reachable without a transport.
pub struct MockClient {
    server_info: Implementation,
    protocol_version: Mutex<String>,
    tools: Mutex<Vec<ToolDescriptor>>,
    behaviors: Mutex<HashMap<String, Behavior>>,
    init_error: Mutex<Option<String>>,
    list_error: Mutex<Option<String>>,
    list_delay: Mutex<Option<Duration>>,
    init_requests: Mutex<Vec<InitializeRequest>>,
    calls: Mutex<Vec<CallToolRequest>>,
    call_contexts: Mutex<Vec<CallContext>>,
    list_count: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            server_info: Implementation::new("mock-server", "0.9.0"),
            protocol_version: Mutex::new(PROTOCOL_VERSION.to_string()),
            tools: Mutex::new(Vec::new()),
            behaviors: Mutex::new(HashMap::new()),
            init_error: Mutex::new(None),
            list_error: Mutex::new(None),
            list_delay: Mutex::new(None),
            init_requests: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            call_contexts: Mutex::new(Vec::new()),
            list_count: AtomicUsize::new(0),
        }
    }

    /// Advertise a tool that answers with `behavior`.
    pub fn with_tool(self, descriptor: ToolDescriptor, behavior: Behavior) -> Self {
        self.add_tool(descriptor, behavior);
        self
    }

    pub fn add_tool(&self, descriptor: ToolDescriptor, behavior: Behavior) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(descriptor.name.clone(), behavior);
        self.tools.lock().unwrap().push(descriptor);
    }

    pub fn clear_tools(&self) {
        self.tools.lock().unwrap().clear();
        self.behaviors.lock().unwrap().clear();
    }

    pub fn set_protocol_version(&self, version: &str) {
        *self.protocol_version.lock().unwrap() = version.to_string();
    }

    pub fn fail_initialize(&self, message: &str) {
        *self.init_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_list(&self, message: &str) {
        *self.list_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn delay_list(&self, delay: Duration) {
        *self.list_delay.lock().unwrap() = Some(delay);
    }

    pub fn init_requests(&self) -> Vec<InitializeRequest> {
        self.init_requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<CallToolRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_contexts(&self) -> Vec<CallContext> {
        self.call_contexts.lock().unwrap().clone()
    }

    pub fn list_count(&self) -> usize {
        self.list_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl McpClient for MockClient {
    async fn initialize(
        &self,
        _ctx: &CallContext,
        request: InitializeRequest,
    ) -> Result<InitializeResult, ClientError> {
        self.init_requests.lock().unwrap().push(request);

        if let Some(message) = self.init_error.lock().unwrap().clone() {
            return Err(ClientError::Transport(message));
        }

        Ok(InitializeResult {
            protocol_version: self.protocol_version.lock().unwrap().clone(),
            capabilities: serde_json::json!({ "tools": {} }),
            server_info: self.server_info.clone(),
            instructions: Some("Use fetch_url for web pages.".into()),
        })
    }

    async fn list_tools(&self, _ctx: &CallContext) -> Result<ListToolsResult, ClientError> {
        self.list_count.fetch_add(1, Ordering::SeqCst);

        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.list_error.lock().unwrap().clone() {
            return Err(ClientError::Transport(message));
        }

        Ok(ListToolsResult {
            tools: self.tools.lock().unwrap().clone(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        ctx: &CallContext,
        request: CallToolRequest,
    ) -> Result<CallToolResult, ClientError> {
        self.calls.lock().unwrap().push(request.clone());
        self.call_contexts.lock().unwrap().push(ctx.clone());

        let behavior = self.behaviors.lock().unwrap().get(&request.name).cloned();
        match behavior {
            Some(Behavior::Respond(result)) => Ok(result),
            Some(Behavior::Echo { delay }) => {
                tokio::time::sleep(delay).await;
                let text = serde_json::to_string(&request.arguments)?;
                Ok(CallToolResult::text(text))
            }
            Some(Behavior::Fail { code, message }) => Err(ClientError::Protocol { code, message }),
            Some(Behavior::Hang) => std::future::pending().await,
            None => Err(ClientError::Protocol {
                code: -32602,
                message: format!("unknown tool: {}", request.name),
            }),
        }
    }
}
