//! Typed errors for listing extraction.

use thiserror::Error;

/// Errors that can occur while scraping listings for a keyword.
///
/// Callers over HTTP see one opaque failure; the variants exist for logs
/// and tests.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Network failure or non-success status
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Page has no server-state node (markup changed)
    #[error("no embedded state found in {url}")]
    NoEmbeddedState { url: String },

    /// Split-based JSON recovery failed
    #[error("malformed embedded state: {0}")]
    MalformedState(String),

    /// Recovered JSON no longer matches the payload we read
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
