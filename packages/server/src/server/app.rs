//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_job, delete_job, export_jobs, get_job, health_handler, list_jobs, openapi_json,
    scrape_jobs, update_job, ApiDoc,
};

/// CORS for the configured browser origins; unparsable origins are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([CONTENT_DISPOSITION])
}

/// Build the Axum application router
///
/// The interactive API reference is served at `/api-docs`.
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/jobs", post(create_job).get(list_jobs))
        // Static segments win over `/:id`, so export never reaches get_job
        .route("/jobs/export", post(export_jobs))
        .route("/jobs/scrape/:keyword", get(scrape_jobs))
        .route("/jobs/:id", get(get_job).put(update_job).delete(delete_job))
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/api-docs", ApiDoc::openapi()))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(deps))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
