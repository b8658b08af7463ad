pub mod traits;

pub use traits::{Tool, ToolDefinition, ToolError};

/// Collect the function-calling definitions of a tool set, in order.
pub fn tool_definitions<T: Tool + ?Sized>(tools: &[Box<T>]) -> Vec<ToolDefinition> {
    tools.iter().map(|t| t.definition()).collect()
}

/// Find a tool by name.
pub fn find_tool<'t, T: Tool + ?Sized>(tools: &'t [Box<T>], name: &str) -> Option<&'t T> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}
