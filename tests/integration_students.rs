mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_course_class, create_student, create_teacher, enroll_student, request, setup_test_app};

#[tokio::test]
async fn test_create_student() {
    let app = setup_test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "Jane Smith", "birthdate": "2000-03-20" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert_eq!(body["message"], "Student created successfully");

    let id = body["id"].as_u64().unwrap();
    let (status, body) = request(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Jane Smith");
    assert_eq!(body["birthdate"], "2000-03-20");
    assert!(body["age"].is_i64());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_student_missing_name() {
    let app = setup_test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/students",
        Some(json!({ "birthdate": "2000-03-20" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_create_student_wrong_field_type() {
    let app = setup_test_app();

    let (status, _) = request(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": 42, "birthdate": "2000-03-20" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_student_malformed_birthdate() {
    let app = setup_test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "Jane Smith", "birthdate": "20-03-2000" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid date format")
    );

    // Nothing was stored.
    let (_, body) = request(&app, "GET", "/students", None).await;
    assert_eq!(body["students"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_all_students() {
    let app = setup_test_app();
    create_student(&app, "Jane Smith", "2000-03-20").await;
    create_student(&app, "Bill Jones", "2001-07-02").await;

    let (status, body) = request(&app, "GET", "/students", None).await;

    assert_eq!(status, StatusCode::OK);
    let students = body["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["name"], "Jane Smith");
    assert_eq!(students[1]["name"], "Bill Jones");
}

#[tokio::test]
async fn test_get_student_not_found() {
    let app = setup_test_app();

    let (status, body) = request(&app, "GET", "/students/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_update_student() {
    let app = setup_test_app();
    let id = create_student(&app, "Jane Smith", "2000-03-20").await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/students/{id}"),
        Some(json!({ "name": "Jane Updated", "birthdate": "2000-08-15" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated successfully");

    let (_, body) = request(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(body["name"], "Jane Updated");
    assert_eq!(body["birthdate"], "2000-08-15");
}

#[tokio::test]
async fn test_partial_update_keeps_omitted_fields() {
    let app = setup_test_app();
    let id = create_student(&app, "Jane Smith", "2000-03-20").await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/students/{id}"),
        Some(json!({ "name": "Jane Updated" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(body["name"], "Jane Updated");
    assert_eq!(body["birthdate"], "2000-03-20");
}

#[tokio::test]
async fn test_update_student_malformed_birthdate_leaves_state() {
    let app = setup_test_app();
    let id = create_student(&app, "Jane Smith", "2000-03-20").await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/students/{id}"),
        Some(json!({ "name": "Jane Updated", "birthdate": "15-08-2000" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid date format")
    );

    // Neither field changed.
    let (_, body) = request(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(body["name"], "Jane Smith");
    assert_eq!(body["birthdate"], "2000-03-20");
}

#[tokio::test]
async fn test_update_student_not_found() {
    let app = setup_test_app();

    let (status, _) = request(
        &app,
        "PUT",
        "/students/42",
        Some(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_student() {
    let app = setup_test_app();
    let id = create_student(&app, "Jane Smith", "2000-03-20").await;

    let (status, body) = request(&app, "DELETE", &format!("/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = request(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_student_not_found() {
    let app = setup_test_app();

    let (status, _) = request(&app, "DELETE", "/students/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_distinct_and_increasing() {
    let app = setup_test_app();

    let first = create_student(&app, "A", "2000-01-01").await;
    let second = create_student(&app, "B", "2000-01-02").await;
    let third = create_student(&app, "C", "2000-01-03").await;

    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_student_course_classes_view() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;
    let student_id = create_student(&app, "Jane Smith", "2000-03-20").await;
    let class_id = create_course_class(&app, teacher_id).await;
    enroll_student(&app, class_id, student_id).await;

    let (status, body) = request(
        &app,
        "GET",
        &format!("/students/{student_id}/course-classes"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["id"], student_id);
    assert_eq!(body["student"]["name"], "Jane Smith");
    let classes = body["course_classes"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["id"], class_id);
    assert_eq!(classes[0]["teacher_id"], teacher_id);
}

#[tokio::test]
async fn test_student_course_classes_not_found() {
    let app = setup_test_app();

    let (status, _) = request(&app, "GET", "/students/42/course-classes", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
