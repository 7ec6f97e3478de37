//! Summary persistence

use crate::error::Result;
use crate::models::{SaveSummaryRequest, SavedSummary, SummaryRecord};
use crate::store::SummaryStore;
use tracing::info;

/// Upsert a summary and acknowledge it
pub async fn cmd_save_summary(store: &SummaryStore, req: SaveSummaryRequest) -> Result<SavedSummary> {
    let record = SummaryRecord::from(req);
    store.upsert_summary(&record).await?;

    info!(
        document_id = %record.document_id,
        filename = %record.filename,
        status = %record.status,
        "Summary saved"
    );

    Ok(SavedSummary {
        document_id: record.document_id,
        filename: record.filename,
        status: record.status,
        saved: true,
    })
}
