//! `/jobs` HTTP handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, Query,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::domains::jobs::actions;
use crate::domains::jobs::export::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::domains::jobs::{
    CreateJobInput, JobChanges, JobFilter, JobListing, NewJobListing, UpdateJobInput,
};
use crate::kernel::ServerDeps;
use crate::server::error::{ApiError, MessageBody};

/// Create a new job
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "Jobs",
    request_body = CreateJobInput,
    responses(
        (status = 201, description = "Job created successfully", body = JobListing),
        (status = 400, description = "Invalid input", body = MessageBody)
    )
)]
pub async fn create_job(
    Extension(deps): Extension<ServerDeps>,
    body: Result<Json<CreateJobInput>, JsonRejection>,
) -> Result<(StatusCode, Json<JobListing>), ApiError> {
    let Json(input) = body?;
    let listing = NewJobListing::try_from(input)?;

    let job = JobListing::create(&listing, &deps.db_pool)
        .await
        .map_err(ApiError::internal)?;

    tracing::debug!(job_id = job.id, "Created job");
    Ok((StatusCode::CREATED, Json(job)))
}

/// Get all jobs
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "Jobs",
    params(JobFilter),
    responses(
        (status = 200, description = "List of jobs", body = Vec<JobListing>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn list_jobs(
    Extension(deps): Extension<ServerDeps>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    let jobs = JobListing::find_all(&filter, &deps.db_pool)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(jobs))
}

/// Get a job by ID
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job data", body = JobListing),
        (status = 404, description = "Job not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn get_job(
    Extension(deps): Extension<ServerDeps>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<JobListing>, ApiError> {
    let Path(id) = id?;
    JobListing::find_by_id(id, &deps.db_pool)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(ApiError::job_not_found)
}

/// Update a job by ID
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = i32, Path, description = "Job ID")),
    request_body = UpdateJobInput,
    responses(
        (status = 200, description = "Job updated successfully", body = JobListing),
        (status = 400, description = "Invalid input", body = MessageBody),
        (status = 404, description = "Job not found", body = MessageBody)
    )
)]
pub async fn update_job(
    Extension(deps): Extension<ServerDeps>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateJobInput>, JsonRejection>,
) -> Result<Json<JobListing>, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let changes = JobChanges::try_from(input)?;

    JobListing::update(id, &changes, &deps.db_pool)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(ApiError::job_not_found)
}

/// Delete a job by ID
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "Jobs",
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job deleted successfully", body = MessageBody),
        (status = 404, description = "Job not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn delete_job(
    Extension(deps): Extension<ServerDeps>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    let deleted = JobListing::delete(id, &deps.db_pool)
        .await
        .map_err(ApiError::internal)?;

    if !deleted {
        return Err(ApiError::job_not_found());
    }
    Ok(Json(MessageBody::new("Job deleted")))
}

/// Scrape job data from JobStreet and save to database
#[utoipa::path(
    get,
    path = "/jobs/scrape/{keyword}",
    tag = "Jobs",
    params(("keyword" = String, Path, description = "Keyword for scraping job data")),
    responses(
        (status = 200, description = "Successfully scraped and saved job data", body = Vec<JobListing>),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn scrape_jobs(
    Extension(deps): Extension<ServerDeps>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    match actions::scrape_keyword(&keyword, &deps).await {
        Ok(jobs) => Ok(Json(jobs)),
        Err(e) => {
            tracing::error!(keyword = %keyword, error = %format!("{e:#}"), "Scrape failed");
            Err(ApiError::Scrape)
        }
    }
}

/// Export job data to Excel
#[utoipa::path(
    post,
    path = "/jobs/export",
    tag = "Jobs",
    params(JobFilter),
    responses(
        (status = 200, description = "Successfully exported job data to Excel",
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
pub async fn export_jobs(
    Extension(deps): Extension<ServerDeps>,
    Query(filter): Query<JobFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let workbook = actions::export_jobs(&filter, &deps.db_pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %format!("{e:#}"), "Export failed");
            ApiError::Export
        })?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILE_NAME}"),
            ),
        ],
        workbook,
    ))
}
