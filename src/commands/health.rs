//! Health check

use crate::config::SERVICE_NAME;
use crate::models::HealthStatus;
use crate::store::SummaryStore;
use tracing::warn;

/// Probe the database and report service health
pub async fn cmd_health(store: &SummaryStore) -> HealthStatus {
    match store.ping().await {
        Ok(()) => HealthStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            database: "connected".to_string(),
        },
        Err(e) => {
            warn!("Health check failed: {}", e);
            HealthStatus {
                status: "unhealthy".to_string(),
                service: SERVICE_NAME.to_string(),
                database: format!("error: {}", e),
            }
        }
    }
}
