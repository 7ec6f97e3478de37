//! Default values for configuration

use std::path::PathBuf;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "MCP Directory Analyzer Server";

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "directory-analyzer.toml";

/// Chunk size used when a read request omits `chunk_size`
pub const DEFAULT_CHUNK_SIZE: i64 = 2000;

/// Default bind host (all interfaces)
pub fn default_host() -> String {
    std::env::var("ANALYZER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// Default bind port
pub fn default_port() -> u16 {
    std::env::var("ANALYZER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3333)
}

/// Default SQLite database file, relative to the working directory
pub fn default_db_file() -> PathBuf {
    std::env::var_os("ANALYZER_DB_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("summaries.db"))
}

/// Default directory for documents handed to the server
pub fn default_books_dir() -> PathBuf {
    PathBuf::from("data").join("books")
}

/// Default extensions kept by the directory lister
pub fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string(), "pdf".to_string()]
}
