//! Shared helpers for adapter integration tests.
#![allow(dead_code)]

pub mod mock_client;

pub use mock_client::{Behavior, MockClient};

use mcp_tool_adapter::types::{InputSchema, ToolDescriptor};
use serde_json::{Map, Value};

/// Route `tracing` output through the test harness (RUST_LOG to enable).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Descriptor whose schema has the given properties.
pub fn descriptor(name: &str, description: &str, properties: Value) -> ToolDescriptor {
    let properties: Map<String, Value> = match properties {
        Value::Object(map) => map,
        other => panic!("properties must be an object, got {other}"),
    };
    ToolDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: InputSchema::with_properties(properties),
    }
}
