pub mod types;

pub use types::{
    CreateJobInput, JobChanges, JobFilter, JobValidationError, NewJobListing, UpdateJobInput,
};
