//! Job listings: storage, scraping from the job board, spreadsheet export.

pub mod actions;
pub mod data;
pub mod export;
pub mod extraction;
pub mod models;
pub mod tag;

// Re-export data types (HTTP request/response shapes)
pub use data::{CreateJobInput, JobChanges, JobFilter, JobValidationError, NewJobListing, UpdateJobInput};

// Re-export models (domain models)
pub use models::job_listing::JobListing;

pub use tag::normalize_tag;
