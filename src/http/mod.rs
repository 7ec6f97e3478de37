//! HTTP surface
//!
//! JSON in, JSON out. Failures map to 404 (missing path), 422 (malformed
//! body), 500 (read or storage failure) and 503 (health check), each with a
//! `detail` field.

mod error;
mod handlers;

pub use error::AppJson;

use crate::context::ServiceContext;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
pub fn router(ctx: ServiceContext) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/mcp/tools", get(handlers::mcp_tools))
        .route("/list_directory", post(handlers::list_directory))
        .route("/read_document_chunk", post(handlers::read_document_chunk))
        .route("/save_summary_to_db", post(handlers::save_summary_to_db))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(ctx: ServiceContext, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
