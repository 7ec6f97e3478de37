//! Request and response types shared by the HTTP and MCP surfaces

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
}

/// Result of `list_directory`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub path: String,
    pub files: Vec<DirectoryEntry>,
}

/// One page of a document's decoded text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub path: String,
    pub filename: String,
    /// Effective start offset, never negative
    pub offset: i64,
    /// `None` exactly when `eof` is true
    pub next_offset: Option<i64>,
    /// Character length of `content`
    pub chunk_size: i64,
    pub total_length: i64,
    pub progress: String,
    pub eof: bool,
    pub content: String,
}

/// Outcome recorded for a summarized document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Completed,
    Failed,
}

impl std::fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryStatus::Completed => write!(f, "completed"),
            SummaryStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for SummaryStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "completed" => Ok(SummaryStatus::Completed),
            "failed" => Ok(SummaryStatus::Failed),
            _ => Err(Error::Validation(format!("Unknown summary status: {}", s))),
        }
    }
}

/// A persisted document summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub document_id: String,
    pub filename: String,
    pub summary: String,
    pub status: SummaryStatus,
}

/// Acknowledgement returned by `save_summary_to_db`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSummary {
    pub document_id: String,
    pub filename: String,
    pub status: SummaryStatus,
    pub saved: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListDirectoryRequest {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadDocumentChunkRequest {
    pub path: String,
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i64,
}

fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveSummaryRequest {
    pub document_id: String,
    pub filename: String,
    pub summary: String,
    pub status: SummaryStatus,
}

impl From<SaveSummaryRequest> for SummaryRecord {
    fn from(req: SaveSummaryRequest) -> Self {
        Self {
            document_id: req.document_id,
            filename: req.filename,
            summary: req.summary,
            status: req.status,
        }
    }
}

/// Health report for the service and its database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub database: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
