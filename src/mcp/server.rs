//! MCP stdio server implementation

use super::tools::{get_tool_definitions, handle_tool_call};
use super::types::{CallToolParams, ErrorCode, McpError, McpRequest, McpResponse};
use crate::context::ServiceContext;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// MCP Server implementation
pub struct McpServer {
    ctx: ServiceContext,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the MCP server loop over stdio
    pub async fn run(&self) -> Result<(), McpError> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        info!("MCP server starting on stdio");
        self.serve(stdin, stdout).await?;
        info!("MCP server shutting down");
        Ok(())
    }

    /// Serve newline-delimited JSON-RPC until `reader` is exhausted
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let value: Value = match serde_json::from_str(&line) {
                Ok(v) => v,
                Err(e) => {
                    error!("Failed to parse message: {}", e);
                    let response = McpResponse::error(
                        None,
                        McpError::new(ErrorCode::ParseError, format!("Parse error: {}", e)),
                    );
                    write_message(&mut writer, &response).await?;
                    continue;
                }
            };

            // replies from the client carry no method
            if value.get("method").is_none() {
                warn!("Unexpected response message received");
                continue;
            }

            let id = value.get("id").cloned().filter(|id| !id.is_null());
            let request: McpRequest = match serde_json::from_value(value) {
                Ok(r) => r,
                Err(e) => {
                    let response = McpResponse::error(
                        id,
                        McpError::new(ErrorCode::InvalidRequest, format!("Invalid request: {}", e)),
                    );
                    write_message(&mut writer, &response).await?;
                    continue;
                }
            };

            if request.is_notification() {
                self.handle_notification(&request);
            } else {
                let response = self.handle_request(request).await;
                write_message(&mut writer, &response).await?;
            }
        }

        Ok(())
    }

    /// Handle an MCP request
    async fn handle_request(&self, request: McpRequest) -> McpResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            "ping" => McpResponse::success(id, json!({})),
            _ => McpResponse::error(id, McpError::method_not_found(&request.method)),
        }
    }

    /// Handle notifications (fire-and-forget)
    fn handle_notification(&self, notification: &McpRequest) {
        match notification.method.as_str() {
            "notifications/initialized" => {
                info!("Client initialized");
            }
            "notifications/cancelled" => {
                info!("Request cancelled");
            }
            _ => {
                debug!("Unknown notification: {}", notification.method);
            }
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> McpResponse {
        McpResponse::success(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {
                        "listChanged": false
                    }
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<Value>) -> McpResponse {
        let tools: Vec<Value> = get_tool_definitions().iter().map(|t| t.to_mcp()).collect();
        McpResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> McpResponse {
        let params = match params.map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                return McpResponse::error(id, McpError::invalid_params(e.to_string()));
            }
            None => return McpResponse::error(id, McpError::invalid_params("Missing params")),
        };

        let result = handle_tool_call(&params.name, params.arguments, &self.ctx).await;

        match serde_json::to_value(&result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, McpError::from(e)),
        }
    }
}

async fn write_message<W>(writer: &mut W, response: &McpResponse) -> Result<(), McpError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(response)?;
    debug!("Sending: {}", line);
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
