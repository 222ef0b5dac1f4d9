// Mock implementations for testing
//
// Provides a scripted document fetcher that can be injected into ServerDeps.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseDocumentFetcher, FetchedDocument};

// =============================================================================
// Mock Document Fetcher
// =============================================================================

enum MockResponse {
    Document { status: u16, body: String },
    TransportError(String),
}

/// Fetcher that replays queued responses in order and records every URL.
///
/// Once the queue is drained it answers with an empty 200 page.
#[derive(Clone, Default)]
pub struct MockDocumentFetcher {
    responses: Arc<Mutex<Vec<MockResponse>>>,
    fetch_calls: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body.
    pub fn with_document(self, body: &str) -> Self {
        self.with_status(200, body)
    }

    /// Queue a response with an explicit status code.
    pub fn with_status(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push(MockResponse::Document {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Queue a transport failure (connection refused, timeout, ...).
    pub fn with_transport_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockResponse::TransportError(message.to_string()));
        self
    }

    /// Get all URLs that were fetched
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseDocumentFetcher for MockDocumentFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument> {
        self.fetch_calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        let next = if responses.is_empty() {
            None
        } else {
            Some(responses.remove(0))
        };

        match next {
            Some(MockResponse::TransportError(message)) => Err(anyhow::anyhow!(message)),
            Some(MockResponse::Document { status, body }) => Ok(FetchedDocument { status, body }),
            None => Ok(FetchedDocument {
                status: 200,
                body: "<html><body></body></html>".to_string(),
            }),
        }
    }
}
