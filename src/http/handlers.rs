//! Route handlers

use super::error::AppJson;
use crate::commands::{cmd_health, cmd_list_directory, cmd_read_document_chunk, cmd_save_summary};
use crate::context::ServiceContext;
use crate::error::Result;
use crate::mcp::{get_tool_definitions, ToolDefinition};
use crate::models::{
    ChunkResult, DirectoryListing, ListDirectoryRequest, ReadDocumentChunkRequest,
    SaveSummaryRequest, SavedSummary,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn health(State(ctx): State<ServiceContext>) -> Response {
    let health = cmd_health(&ctx.store).await;
    if health.is_healthy() {
        Json(health).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "detail": health })),
        )
            .into_response()
    }
}

pub async fn mcp_tools() -> Json<serde_json::Value> {
    let tools: Vec<ToolDefinition> = get_tool_definitions();
    Json(json!({ "tools": tools }))
}

pub async fn list_directory(
    State(ctx): State<ServiceContext>,
    AppJson(req): AppJson<ListDirectoryRequest>,
) -> Result<Json<DirectoryListing>> {
    let listing = cmd_list_directory(&req.path, &ctx.extensions).await?;
    Ok(Json(listing))
}

pub async fn read_document_chunk(
    AppJson(req): AppJson<ReadDocumentChunkRequest>,
) -> Result<Json<ChunkResult>> {
    let chunk = cmd_read_document_chunk(&req.path, req.offset, req.chunk_size).await?;
    Ok(Json(chunk))
}

pub async fn save_summary_to_db(
    State(ctx): State<ServiceContext>,
    AppJson(req): AppJson<SaveSummaryRequest>,
) -> Result<Json<SavedSummary>> {
    let saved = cmd_save_summary(&ctx.store, req).await?;
    Ok(Json(saved))
}
