//! HTTP error responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domains::jobs::JobValidationError;

pub const SCRAPE_FAILED: &str = "An error occurred while scraping the site";
pub const EXPORT_FAILED: &str = "An error occurred while exporting data to Excel";

/// Errors returned by the `/jobs` routes.
///
/// CRUD failures answer with `{"message": ...}`; scrape and export failures
/// answer with a fixed plain-text message and never expose the cause.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("{}", SCRAPE_FAILED)]
    Scrape,

    #[error("{}", EXPORT_FAILED)]
    Export,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ApiError {
    pub fn job_not_found() -> Self {
        Self::NotFound("Job not found".to_string())
    }

    /// Log a storage failure and wrap it for the response.
    pub fn internal(error: anyhow::Error) -> Self {
        tracing::error!(error = %format!("{error:#}"), "Job request failed");
        Self::Internal(error.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Scrape | ApiError::Export => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match self {
            ApiError::Scrape | ApiError::Export => (status, message).into_response(),
            _ => (status, Json(MessageBody { message })).into_response(),
        }
    }
}

impl From<JobValidationError> for ApiError {
    fn from(error: JobValidationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
