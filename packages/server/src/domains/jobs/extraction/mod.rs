//! Listing extraction from the job board's search page.
//!
//! One keyword, one fetch: the search page for the keyword is downloaded,
//! its server-state script is located and the listings inside are
//! normalized into [`NewJobListing`]s tagged with the keyword.

pub mod embedded_state;
pub mod error;
pub mod payload;

pub use embedded_state::recover_state_json;
pub use error::ExtractionError;
pub use payload::{RawJob, ServerState};

use tracing::{debug, info, warn};

use crate::domains::jobs::data::NewJobListing;
use crate::domains::jobs::tag::normalize_tag;
use crate::kernel::{query_text, BaseDocumentFetcher};
use error::Result;

/// Marker attribute of the node carrying server-rendered state.
pub const SERVER_STATE_SELECTOR: &str = "[data-automation=server-state]";

/// Search page URL for an already-normalized keyword.
pub fn search_url(base_url: &str, keyword: &str) -> String {
    format!("{}/{}-jobs", base_url.trim_end_matches('/'), keyword)
}

/// Fetch the search page for `keyword` and extract its listings.
///
/// Listings keep the page's order. Any failure fails the whole keyword.
pub async fn extract_listings(
    fetcher: &dyn BaseDocumentFetcher,
    base_url: &str,
    keyword: &str,
) -> Result<Vec<NewJobListing>> {
    let tag = normalize_tag(keyword);
    let url = search_url(base_url, &tag);

    info!(keyword = %keyword, url = %url, "Fetching job search page");
    let document = fetcher.fetch(&url).await.map_err(|e| {
        warn!(url = %url, error = %e, "Job search request failed");
        ExtractionError::Fetch {
            url: url.clone(),
            reason: e.to_string(),
        }
    })?;

    if !document.is_success() {
        return Err(ExtractionError::Fetch {
            url,
            reason: format!("HTTP {}", document.status),
        });
    }

    let listings = parse_listings(&document.body, &url, &tag)?;
    info!(url = %url, count = listings.len(), "Extracted job listings");
    Ok(listings)
}

/// Extract listings from a search page that has already been fetched.
pub fn parse_listings(html: &str, url: &str, tag: &str) -> Result<Vec<NewJobListing>> {
    let state_text =
        query_text(html, SERVER_STATE_SELECTOR).ok_or_else(|| ExtractionError::NoEmbeddedState {
            url: url.to_string(),
        })?;
    debug!(url = %url, bytes = state_text.len(), "Found embedded server state");

    let state = ServerState::from_value(recover_state_json(&state_text)?)?;

    state
        .into_jobs()
        .into_iter()
        .map(|job| job.into_listing(tag))
        .collect()
}
