use axum::Json;
use utoipa::OpenApi;

use super::jobs;
use crate::domains::jobs::{CreateJobInput, JobListing, UpdateJobInput};
use crate::server::error::MessageBody;

/// OpenAPI document for the job routes
#[derive(OpenApi)]
#[openapi(
    info(title = "Job API", version = "1.0.0", description = "API for managing jobs"),
    paths(
        jobs::create_job,
        jobs::list_jobs,
        jobs::get_job,
        jobs::update_job,
        jobs::delete_job,
        jobs::scrape_jobs,
        jobs::export_jobs,
    ),
    components(schemas(JobListing, CreateJobInput, UpdateJobInput, MessageBody)),
    tags((name = "Jobs", description = "Job management"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
