//! SQLite schema definition

/// SQL schema for the summary database
pub const SCHEMA_SQL: &str = r#"
-- Summaries: one row per document, replaced wholesale on every save
CREATE TABLE IF NOT EXISTS summaries (
    document_id TEXT PRIMARY KEY,
    filename TEXT,
    summary TEXT,
    status TEXT
);
"#;
