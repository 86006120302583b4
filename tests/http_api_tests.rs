#![cfg(feature = "http-server")]

//! Integration tests for the REST surface: routing, DTO conversion, and
//! the mapping from store errors to status codes.

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use exam_scheduler::http::{create_router, AppState};
use exam_scheduler::ExamStore;

fn new_router() -> Router {
    create_router(AppState::new(Arc::new(ExamStore::in_memory())))
}

fn future_date(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days)).to_string()
}

fn exam_json(id: &str, batch: &str, start: &str, end: &str, venue: &str) -> Value {
    json!({
        "id": id,
        "module_code": "CS101",
        "batch_id": batch,
        "date": future_date(7),
        "start_time": start,
        "end_time": end,
        "venue": venue,
        "max_marks": 100,
        "exam_type": "FINAL",
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(value).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_store_size() {
    let app = new_router();

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["exams"], 0);
}

#[tokio::test]
async fn exam_lifecycle_via_http() {
    let app = new_router();

    let (status, created) = send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "E1");
    assert_eq!(created["start_time"], "09:00");

    let (status, fetched) = send(&app, "GET", "/v1/exams/E1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["venue"], "Hall A");

    let (status, list) = send(&app, "GET", "/v1/exams", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);

    let (status, _) = send(&app, "DELETE", "/v1/exams/E1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(&app, "GET", "/v1/exams/E1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn conflicting_add_returns_409_with_details() {
    let app = new_router();

    let (status, _) = send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E2", "B1", "10:00", "12:00", "Hall B")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "SCHEDULE_CONFLICT");
    assert_eq!(error["details"], json!(["Batch conflict: E1 for CS101"]));
}

#[tokio::test]
async fn duplicate_id_returns_409() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    let (status, error) = send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B2", "13:00", "15:00", "Hall B")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_ID");
}

#[tokio::test]
async fn malformed_time_returns_400() {
    let app = new_router();

    let (status, error) = send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "25:00", "26:00", "Hall A")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_rejects_mismatched_path_and_body_ids() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    let (status, error) = send(
        &app,
        "PUT",
        "/v1/exams/E1",
        Some(&exam_json("E2", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;

    let mut updated = exam_json("E1", "B1", "09:00", "11:00", "Hall A");
    updated["max_marks"] = json!(60);
    updated["exam_type"] = json!("MIDTERM");
    let (status, body) = send(&app, "PUT", "/v1/exams/E1", Some(&updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_marks"], 60);
    assert_eq!(body["exam_type"], "MIDTERM");
}

#[tokio::test]
async fn module_and_batch_listings_are_sorted() {
    let app = new_router();

    let mut later = exam_json("E2", "B1", "13:00", "15:00", "Hall B");
    later["date"] = json!(future_date(8));
    send(&app, "POST", "/v1/exams", Some(&later)).await;
    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;

    let (status, by_batch) = send(&app, "GET", "/v1/batches/B1/exams", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_batch["exams"][0]["id"], "E1");
    assert_eq!(by_batch["exams"][1]["id"], "E2");

    let (status, by_module) = send(&app, "GET", "/v1/modules/CS101/exams", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_module["total"], 2);

    let (_, empty) = send(&app, "GET", "/v1/modules/ZZ999/exams", None).await;
    assert_eq!(empty["total"], 0);
}

#[tokio::test]
async fn conflict_check_endpoint_does_not_mutate() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;

    let (status, check) = send(
        &app,
        "POST",
        "/v1/conflicts/check",
        Some(&exam_json("E9", "B1", "10:00", "12:00", "Hall A")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["has_conflict"], true);
    assert_eq!(check["details"].as_array().unwrap().len(), 2);

    let (_, list) = send(&app, "GET", "/v1/exams", None).await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn venue_availability_endpoint() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Main-Hall")),
    )
    .await;

    let date = future_date(7);
    let (status, busy) = send(
        &app,
        "GET",
        &format!("/v1/venues/main-hall/availability?date={date}&start=10:00&end=12:00"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(busy["available"], false);

    let (_, free) = send(
        &app,
        "GET",
        &format!("/v1/venues/main-hall/availability?date={date}&start=11:00&end=12:00"),
        None,
    )
    .await;
    assert_eq!(free["available"], true);

    let (status, error) = send(
        &app,
        "GET",
        &format!("/v1/venues/main-hall/availability?date={date}&start=bogus&end=12:00"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn statistics_endpoint_reports_live_counts() {
    let app = new_router();

    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E1", "B1", "09:00", "11:00", "Hall A")),
    )
    .await;
    send(
        &app,
        "POST",
        "/v1/exams",
        Some(&exam_json("E2", "B2", "09:00", "11:00", "Hall B")),
    )
    .await;

    let (status, stats) = send(&app, "GET", "/v1/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["upcoming"], 2);
    assert_eq!(stats["past"], 0);
    assert_eq!(stats["distinct_modules"], 1);
    assert_eq!(stats["distinct_batches"], 2);
}
