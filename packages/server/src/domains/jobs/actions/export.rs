use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::domains::jobs::data::JobFilter;
use crate::domains::jobs::export::render_workbook;
use crate::domains::jobs::models::JobListing;

/// Render the listings matching `filter` as XLSX bytes.
pub async fn export_jobs(filter: &JobFilter, pool: &PgPool) -> Result<Vec<u8>> {
    let jobs = JobListing::find_all(filter, pool).await?;
    let workbook = render_workbook(&jobs).context("Failed to render jobs workbook")?;
    info!(
        tag = ?filter.normalized_tag(),
        rows = jobs.len(),
        bytes = workbook.len(),
        "Exported jobs workbook"
    );
    Ok(workbook)
}
