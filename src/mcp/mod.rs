//! MCP (Model Context Protocol) server implementation
//!
//! Exposes the document tools over stdio for agent hosts, and provides the
//! tool catalog also served over HTTP.

mod server;
mod tools;
mod types;

pub use server::McpServer;
pub use tools::{call_tool, get_tool_definitions, handle_tool_call, ToolDefinition};
pub use types::{McpError, McpRequest, McpResponse, ToolContent, ToolResult};
