//! directory-analyzer: document access tools for LLM agents
//!
//! Three operations, served over HTTP and MCP stdio:
//! - list a directory's documents, filtered by extension
//! - read a document's decoded text one chunk at a time
//! - upsert a per-document summary into SQLite

pub mod chunk;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod mcp;
pub mod models;
pub mod parse;
pub mod store;

pub use context::ServiceContext;
pub use error::{Error, Result};
