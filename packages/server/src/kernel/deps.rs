//! Server dependencies (using traits for testability)
//!
//! The one handle every route and action works through: the database pool
//! plus the outbound document fetcher.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::DEFAULT_JOBSTREET_BASE_URL;
use crate::kernel::BaseDocumentFetcher;

/// Server dependencies accessible to handlers and actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub fetcher: Arc<dyn BaseDocumentFetcher>,
    /// Search page root the scraper builds keyword URLs under
    pub jobstreet_base_url: String,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, fetcher: Arc<dyn BaseDocumentFetcher>) -> Self {
        Self {
            db_pool,
            fetcher,
            jobstreet_base_url: DEFAULT_JOBSTREET_BASE_URL.to_string(),
        }
    }

    pub fn with_jobstreet_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.jobstreet_base_url = base_url.into();
        self
    }
}
