//! Integration tests for the `/jobs` CRUD routes.

mod common;

use crate::common::{create_test_job, job_body, unique_tag, TestHarness};
use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn create_job_returns_created_row(ctx: &TestHarness) {
    let mut body = job_body("Data Engineer");
    body["tag"] = json!("data engineer");

    let response = ctx.post("/jobs", body).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let job = response.json();
    assert!(job["id"].as_i64().unwrap() > 0);
    assert_eq!(job["title"], "Data Engineer");
    assert_eq!(job["companyName"], "Acme");
    assert_eq!(job["bulletPoints"], json!(["Hybrid", "BPJS"]));
    assert_eq!(job["tag"], "data-engineer");
    assert!(job["listingDate"]
        .as_str()
        .unwrap()
        .starts_with("2024-05-01T00:00:00"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_job_defaults_listing_date(ctx: &TestHarness) {
    let mut body = job_body("Backend Engineer");
    body.as_object_mut().unwrap().remove("listingDate");

    let response = ctx.post("/jobs", body).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.json()["listingDate"].is_string());
    assert!(response.json()["tag"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_job_missing_field_is_bad_request(ctx: &TestHarness) {
    let mut body = job_body("No Salary");
    body.as_object_mut().unwrap().remove("salary");

    let response = ctx.post("/jobs", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "salary is required");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_job_malformed_body_is_bad_request(ctx: &TestHarness) {
    let response = ctx.post("/jobs", json!({ "title": 42 })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["message"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_jobs_filters_by_normalized_tag(ctx: &TestHarness) {
    let tag = unique_tag("list-filter");
    let spaced = tag.replace('-', " ");
    let first = create_test_job(&ctx.db_pool, "First", Some(tag.as_str())).await.unwrap();
    let second = create_test_job(&ctx.db_pool, "Second", Some(tag.as_str())).await.unwrap();
    create_test_job(&ctx.db_pool, "Other", Some("unrelated-tag"))
        .await
        .unwrap();

    let response = ctx
        .get(&format!("/jobs?tag={}", spaced.replace(' ', "%20")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let jobs = response.json();
    let ids: Vec<i64> = jobs
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id as i64, second.id as i64]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_jobs_without_tag_returns_everything(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Untagged", None).await.unwrap();

    let response = ctx.get("/jobs").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .json()
        .as_array()
        .unwrap()
        .iter()
        .any(|row| row["id"].as_i64() == Some(job.id as i64)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_job_by_id(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Analyst", None).await.unwrap();

    let response = ctx.get(&format!("/jobs/{}", job.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["title"], "Analyst");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_missing_job_is_not_found(ctx: &TestHarness) {
    let response = ctx.get("/jobs/2147483000").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Job not found");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_job_with_non_numeric_id_is_bad_request(ctx: &TestHarness) {
    let response = ctx.get("/jobs/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_job_changes_only_given_fields(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Old Title", Some("before"))
        .await
        .unwrap();

    let response = ctx
        .put(
            &format!("/jobs/{}", job.id),
            json!({ "title": "New Title", "tag": "after update" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = response.json();
    assert_eq!(updated["title"], "New Title");
    assert_eq!(updated["companyName"], "Acme");
    assert_eq!(updated["tag"], "after-update");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_job_can_clear_tag(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Tagged", Some("to-clear"))
        .await
        .unwrap();

    let response = ctx
        .put(&format!("/jobs/{}", job.id), json!({ "tag": null }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["tag"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_job_rejects_null_required_field(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Keep", None).await.unwrap();

    let response = ctx
        .put(&format!("/jobs/{}", job.id), json!({ "title": null }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "title is required");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_missing_job_is_not_found(ctx: &TestHarness) {
    let response = ctx
        .put("/jobs/2147483000", json!({ "title": "Nobody" }))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn delete_job_removes_row(ctx: &TestHarness) {
    let job = create_test_job(&ctx.db_pool, "Short Lived", None)
        .await
        .unwrap();

    let response = ctx.delete(&format!("/jobs/{}", job.id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Job deleted");

    let again = ctx.delete(&format!("/jobs/{}", job.id)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let fetched = ctx.get(&format!("/jobs/{}", job.id)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_database(ctx: &TestHarness) {
    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["database"]["status"], "ok");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn openapi_document_is_served(ctx: &TestHarness) {
    let response = ctx.get("/api-docs/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["paths"]["/jobs/{id}"].is_object());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn api_reference_page_is_html(ctx: &TestHarness) {
    let response = ctx.get("/api-docs").await;

    assert_eq!(response.status, StatusCode::OK);
    let content_type = response.headers[axum::http::header::CONTENT_TYPE]
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    assert!(response.text().contains("Job API"));
}
