//! The subset of the job board's server state we read.
//!
//! Only `results.results.jobs` is decoded; everything else in the state
//! object is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::error::{ExtractionError, Result};
use crate::common::datetime;
use crate::domains::jobs::data::NewJobListing;

#[derive(Debug, Deserialize)]
pub struct ServerState {
    pub results: ResultsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
    pub results: SearchResults,
}

#[derive(Debug, Deserialize)]
pub struct SearchResults {
    pub jobs: Vec<RawJob>,
}

/// One listing as the job board reports it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub advertiser: Option<Advertiser>,
    pub work_type: String,
    #[serde(default)]
    pub job_location: Option<JobLocation>,
    pub salary: String,
    #[serde(default)]
    pub bullet_points: Option<Vec<String>>,
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    pub listing_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Advertiser {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobLocation {
    pub label: String,
}

impl ServerState {
    /// Decode the listings out of recovered state JSON.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            ExtractionError::UnexpectedShape(format!("results.results.jobs: {e}"))
        })
    }

    pub fn into_jobs(self) -> Vec<RawJob> {
        self.results.results.jobs
    }
}

impl RawJob {
    /// Normalize into a storable listing tagged with `tag`.
    ///
    /// Company falls back to the advertiser description, then to an empty
    /// string. A listing without a location fails the whole extraction.
    pub fn into_listing(self, tag: &str) -> Result<NewJobListing> {
        let locations = self
            .job_location
            .map(|location| location.label)
            .ok_or_else(|| {
                ExtractionError::UnexpectedShape(format!("job '{}' has no jobLocation", self.title))
            })?;

        let company_name = self
            .company_name
            .or_else(|| self.advertiser.and_then(|advertiser| advertiser.description))
            .unwrap_or_default();

        Ok(NewJobListing {
            title: self.title,
            company_name,
            work_type: self.work_type,
            locations,
            salary: self.salary,
            bullet_points: self.bullet_points.unwrap_or_default(),
            listing_date: self.listing_date,
            tag: Some(tag.to_string()),
        })
    }
}
