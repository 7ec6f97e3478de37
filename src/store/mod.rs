//! Summary storage using SQLite
//!
//! A single `summaries` table keyed by document id. Saves are upserts: a
//! second save for the same id replaces every column in one statement, and
//! concurrent saves serialize in SQLite as last-write-wins.

mod schema;

pub use schema::*;

use crate::error::{Error, Result};
use crate::models::{SummaryRecord, SummaryStatus};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Raw row as stored; `status` is validated on the way out
#[derive(Debug, Clone, FromRow)]
struct SummaryRow {
    document_id: String,
    filename: Option<String>,
    summary: Option<String>,
    status: Option<String>,
}

impl TryFrom<SummaryRow> for SummaryRecord {
    type Error = Error;

    fn try_from(row: SummaryRow) -> Result<Self> {
        let status: SummaryStatus = row.status.as_deref().unwrap_or_default().parse()?;
        Ok(Self {
            document_id: row.document_id,
            filename: row.filename.unwrap_or_default(),
            summary: row.summary.unwrap_or_default(),
            status,
        })
    }
}

/// Summary database handle
#[derive(Clone)]
pub struct SummaryStore {
    pool: SqlitePool,
}

impl SummaryStore {
    /// Open (creating if missing) the database and ensure the schema exists
    pub async fn open(db_path: &Path) -> Result<Self> {
        let store = Self::connect(db_path).await?;
        store.init_schema().await?;
        Ok(store)
    }

    /// Connect to the database without touching the schema
    pub async fn connect(db_path: &Path) -> Result<Self> {
        // Create parent directory if needed
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        debug!("Connecting to SQLite database at {:?}", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Initialize the database schema (idempotent)
    pub async fn init_schema(&self) -> Result<()> {
        info!("Initializing database schema");
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Round-trip a trivial query to prove the database is usable
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a summary, or replace every field of the existing one
    pub async fn upsert_summary(&self, record: &SummaryRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO summaries (document_id, filename, summary, status)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(document_id) DO UPDATE SET
                filename = excluded.filename,
                summary = excluded.summary,
                status = excluded.status
            "#,
        )
        .bind(&record.document_id)
        .bind(&record.filename)
        .bind(&record.summary)
        .bind(record.status.to_string())
        .execute(&self.pool)
        .await?;

        debug!(
            document_id = %record.document_id,
            status = %record.status,
            "Saved summary"
        );
        Ok(())
    }

    /// Get summary by document ID
    pub async fn get_summary(&self, document_id: &str) -> Result<Option<SummaryRecord>> {
        let row = sqlx::query_as::<_, SummaryRow>(
            "SELECT document_id, filename, summary, status FROM summaries WHERE document_id = ?",
        )
        .bind(document_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SummaryRecord::try_from).transpose()
    }

    /// Number of stored summaries
    pub async fn count_summaries(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM summaries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as usize)
    }

    /// Close the pool, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup_test_store() -> (SummaryStore, TempDir) {
        let tmp = TempDir::new().unwrap();
        let store = SummaryStore::open(&tmp.path().join("test.db")).await.unwrap();
        (store, tmp)
    }

    fn record(id: &str, summary: &str, status: SummaryStatus) -> SummaryRecord {
        SummaryRecord {
            document_id: id.to_string(),
            filename: format!("{}.txt", id),
            summary: summary.to_string(),
            status,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let (store, _tmp) = setup_test_store().await;

        let rec = record("doc-1", "A short book.", SummaryStatus::Completed);
        store.upsert_summary(&rec).await.unwrap();

        let loaded = store.get_summary("doc-1").await.unwrap().unwrap();
        assert_eq!(loaded, rec);
        assert!(store.get_summary("doc-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_all_fields() {
        let (store, _tmp) = setup_test_store().await;

        store
            .upsert_summary(&record("doc-1", "first", SummaryStatus::Failed))
            .await
            .unwrap();

        let mut updated = record("doc-1", "second", SummaryStatus::Completed);
        updated.filename = "renamed.md".to_string();
        store.upsert_summary(&updated).await.unwrap();

        assert_eq!(store.count_summaries().await.unwrap(), 1);
        let loaded = store.get_summary("doc-1").await.unwrap().unwrap();
        assert_eq!(loaded.summary, "second");
        assert_eq!(loaded.filename, "renamed.md");
        assert_eq!(loaded.status, SummaryStatus::Completed);
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (store, tmp) = setup_test_store().await;
        store
            .upsert_summary(&record("doc-1", "kept", SummaryStatus::Completed))
            .await
            .unwrap();

        store.init_schema().await.unwrap();
        store.close().await;

        let reopened = SummaryStore::open(&tmp.path().join("test.db")).await.unwrap();
        assert_eq!(reopened.count_summaries().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a").join("b").join("summaries.db");
        let store = SummaryStore::open(&path).await.unwrap();
        store.ping().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_concurrent_upserts_leave_one_row() {
        let (store, _tmp) = setup_test_store().await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let status = if i % 2 == 0 {
                    SummaryStatus::Completed
                } else {
                    SummaryStatus::Failed
                };
                store
                    .upsert_summary(&record("shared", &format!("v{}", i), status))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.count_summaries().await.unwrap(), 1);
        let loaded = store.get_summary("shared").await.unwrap().unwrap();
        assert!(loaded.summary.starts_with('v'));
    }
}
