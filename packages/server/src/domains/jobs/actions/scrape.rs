use anyhow::Result;
use tracing::info;

use crate::domains::jobs::extraction::extract_listings;
use crate::domains::jobs::models::JobListing;
use crate::kernel::ServerDeps;

/// Scrape the job board for `keyword` and store every listing found.
///
/// Extraction errors are passed through unchanged, so callers can
/// `downcast_ref::<ExtractionError>()` them. Nothing is stored unless the
/// whole page extracted cleanly.
pub async fn scrape_keyword(keyword: &str, deps: &ServerDeps) -> Result<Vec<JobListing>> {
    let listings =
        extract_listings(deps.fetcher.as_ref(), &deps.jobstreet_base_url, keyword).await?;

    let saved = JobListing::insert_batch(&listings, &deps.db_pool).await?;
    info!(keyword = %keyword, saved = saved.len(), "Stored scraped job listings");
    Ok(saved)
}
