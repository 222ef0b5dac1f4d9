pub mod job_listing;

pub use job_listing::JobListing;
