//! Test fixtures for creating test data.
//!
//! Rows are created through the model methods directly; pages are
//! built in the shape the job board serves.

use anyhow::Result;
use jobs_core::domains::jobs::{JobListing, NewJobListing};
use serde_json::{json, Value};
use sqlx::PgPool;

/// A unique tag so tests sharing the database never see each other's rows.
pub fn unique_tag(prefix: &str) -> String {
    format!("{}-{}", prefix, rand_suffix())
}

fn rand_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{:x}", nanos)
}

/// Create a test listing carrying `tag`
pub async fn create_test_job(pool: &PgPool, title: &str, tag: Option<&str>) -> Result<JobListing> {
    JobListing::create(
        &NewJobListing {
            title: title.to_string(),
            company_name: "Acme".to_string(),
            work_type: "Full time".to_string(),
            locations: "Jakarta Raya".to_string(),
            salary: "Rp 10.000.000 per month".to_string(),
            bullet_points: vec!["Hybrid".to_string(), "BPJS".to_string()],
            listing_date: None,
            tag: tag.map(str::to_string),
        },
        pool,
    )
    .await
}

/// JSON body accepted by `POST /jobs`
pub fn job_body(title: &str) -> Value {
    json!({
        "title": title,
        "companyName": "Acme",
        "workType": "Full time",
        "locations": "Jakarta Raya",
        "salary": "Rp 10.000.000 per month",
        "bulletPoints": ["Hybrid", "BPJS"],
        "listingDate": "2024-05-01"
    })
}

/// One listing as the job board embeds it
pub fn raw_job(title: &str) -> Value {
    json!({
        "id": "75123456",
        "title": title,
        "companyName": "Acme Corp",
        "advertiser": { "id": "2001", "description": "Acme Corp" },
        "workType": "Full time",
        "jobLocation": { "label": "Jakarta Raya", "countryCode": "ID" },
        "salary": "Rp 12.000.000 – Rp 15.000.000 per month",
        "bulletPoints": ["Hybrid working", "Health insurance"],
        "listingDate": "2024-05-01T03:04:05Z"
    })
}

/// A search results page embedding `jobs` in its server state script
pub fn search_page(jobs: Vec<Value>) -> String {
    let state = json!({
        "results": {
            "results": { "jobs": jobs, "totalCount": 0 },
            "isLoading": false
        }
    });
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
  <head><title>Lowongan kerja</title></head>
  <body>
    <div id="app"></div>
    <script data-automation="server-state">
      window.SEEK_CONFIG = {{"brand":"jobstreet","site":"candidate-jobstreet-id"}};
      window.SEEK_REDUX_DATA = {state};
      window.SEEK_APP_CONFIG = {{"zone":"asia-4"}};
    </script>
  </body>
</html>"#
    )
}
