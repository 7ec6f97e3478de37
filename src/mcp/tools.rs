//! Tool catalog and dispatch

use super::types::ToolResult;
use crate::commands::{cmd_list_directory, cmd_read_document_chunk, cmd_save_summary};
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::models::{ListDirectoryRequest, ReadDocumentChunkRequest, SaveSummaryRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

pub const LIST_DIRECTORY: &str = "list_directory";
pub const READ_DOCUMENT_CHUNK: &str = "read_document_chunk";
pub const SAVE_SUMMARY: &str = "save_summary_to_db";

/// Tool definition as served by `GET /mcp/tools`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Same definition with the MCP wire key `inputSchema`
    pub fn to_mcp(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: LIST_DIRECTORY.to_string(),
            description: "List documents in a directory".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {"type": "string"}
                },
                "required": ["path"]
            }),
        },
        ToolDefinition {
            name: READ_DOCUMENT_CHUNK.to_string(),
            description: "Read a document in chunks".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {"type": "string"},
                    "offset": {"type": "integer", "default": 0},
                    "chunk_size": {"type": "integer", "default": 2000}
                },
                "required": ["path"]
            }),
        },
        ToolDefinition {
            name: SAVE_SUMMARY.to_string(),
            description: "Save document summary to database".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "document_id": {"type": "string"},
                    "filename": {"type": "string"},
                    "summary": {"type": "string"},
                    "status": {
                        "type": "string",
                        "enum": ["completed", "failed"]
                    }
                },
                "required": ["document_id", "filename", "summary", "status"]
            }),
        },
    ]
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| Error::Validation(e.to_string()))
}

/// Run a tool by name, returning its JSON response
pub async fn call_tool(name: &str, arguments: Value, ctx: &ServiceContext) -> Result<Value> {
    let value = match name {
        LIST_DIRECTORY => {
            let req: ListDirectoryRequest = parse_arguments(arguments)?;
            serde_json::to_value(cmd_list_directory(&req.path, &ctx.extensions).await?)?
        }
        READ_DOCUMENT_CHUNK => {
            let req: ReadDocumentChunkRequest = parse_arguments(arguments)?;
            serde_json::to_value(
                cmd_read_document_chunk(&req.path, req.offset, req.chunk_size).await?,
            )?
        }
        SAVE_SUMMARY => {
            let req: SaveSummaryRequest = parse_arguments(arguments)?;
            serde_json::to_value(cmd_save_summary(&ctx.store, req).await?)?
        }
        _ => return Err(Error::Validation(format!("Unknown tool: {}", name))),
    };
    Ok(value)
}

/// Handle a tool call, folding failures into an error result
pub async fn handle_tool_call(name: &str, arguments: Value, ctx: &ServiceContext) -> ToolResult {
    debug!("Calling tool: {} with args: {}", name, arguments);

    match call_tool(name, arguments, ctx).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => ToolResult::text(text),
            Err(e) => ToolResult::error(format!("Failed to encode result: {}", e)),
        },
        Err(e) => {
            error!("Tool {} failed: {}", name, e);
            ToolResult::error(e.to_string())
        }
    }
}
