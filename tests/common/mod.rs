use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use rollbook::config::cors::CorsConfig;
use rollbook::config::server::ServerConfig;
use rollbook::router::init_router;
use rollbook::state::AppState;
use rollbook::store::SharedStore;

/// Builds the real router over a fresh store. The router clones share the
/// store, so one app value serves a whole test scenario.
pub fn setup_test_app() -> Router {
    let state = AppState {
        store: SharedStore::new(),
        cors_config: CorsConfig::from_env(),
        server_config: ServerConfig::from_env(),
    };
    init_router(state)
}

/// Fires one request and returns the status plus the parsed JSON body
/// (`Value::Null` for empty bodies such as 204s).
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn create_student(app: &Router, name: &str, birthdate: &str) -> u64 {
    let (status, body) = request(
        app,
        "POST",
        "/students",
        Some(json!({ "name": name, "birthdate": birthdate })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

#[allow(dead_code)]
pub async fn create_teacher(app: &Router, name: &str, birthdate: &str) -> u64 {
    let (status, body) = request(
        app,
        "POST",
        "/teachers",
        Some(json!({ "name": name, "birthdate": birthdate })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

#[allow(dead_code)]
pub async fn create_course_class(app: &Router, teacher_id: u64) -> u64 {
    let (status, body) = request(
        app,
        "POST",
        "/course-classes",
        Some(json!({ "teacher_id": teacher_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap()
}

#[allow(dead_code)]
pub async fn enroll_student(app: &Router, class_id: u64, student_id: u64) {
    let (status, _) = request(
        app,
        "POST",
        &format!("/course-classes/{class_id}/students"),
        Some(json!({ "student_id": student_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
