// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseDocumentFetcher)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Document Fetcher Trait (Infrastructure)
// =============================================================================

/// A fetched document: final status code and body text.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait BaseDocumentFetcher: Send + Sync {
    /// Fetch a document by URL.
    ///
    /// Only transport failures are errors; non-2xx responses come back as a
    /// `FetchedDocument` so callers decide what a bad status means.
    async fn fetch(&self, url: &str) -> Result<FetchedDocument>;
}
