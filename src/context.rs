//! Shared handles passed to every request handler

use crate::config::Config;
use crate::store::SummaryStore;
use std::sync::Arc;

/// Everything an operation needs, cloned cheaply into each handler
///
/// Lives from startup to shutdown; the store's pool is opened once and
/// reused by every request.
#[derive(Clone)]
pub struct ServiceContext {
    pub store: SummaryStore,
    /// Lowercase extensions, no leading dot
    pub extensions: Arc<Vec<String>>,
}

impl ServiceContext {
    pub fn new(config: &Config, store: SummaryStore) -> Self {
        Self {
            store,
            extensions: Arc::new(config.documents.normalized_extensions()),
        }
    }
}
