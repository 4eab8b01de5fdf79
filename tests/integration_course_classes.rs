mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_course_class, create_teacher, request, setup_test_app};

#[tokio::test]
async fn test_create_course_class() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;

    let (status, body) = request(
        &app,
        "POST",
        "/course-classes",
        Some(json!({ "teacher_id": teacher_id })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert_eq!(body["message"], "Course class created successfully");
}

#[tokio::test]
async fn test_create_course_class_unknown_teacher() {
    let app = setup_test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/course-classes",
        Some(json!({ "teacher_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Teacher not found");
}

#[tokio::test]
async fn test_create_course_class_missing_teacher_id() {
    let app = setup_test_app();

    let (status, body) = request(&app, "POST", "/course-classes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_get_all_course_classes() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;
    create_course_class(&app, teacher_id).await;

    let (status, body) = request(&app, "GET", "/course-classes", None).await;

    assert_eq!(status, StatusCode::OK);
    let classes = body["course_classes"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["teacher_id"], teacher_id);
}

#[tokio::test]
async fn test_get_course_class_by_id() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;
    let class_id = create_course_class(&app, teacher_id).await;

    let (status, body) = request(&app, "GET", &format!("/course-classes/{class_id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], class_id);
    assert_eq!(body["teacher_id"], teacher_id);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_get_course_class_not_found() {
    let app = setup_test_app();

    let (status, body) = request(&app, "GET", "/course-classes/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course class not found");
}

#[tokio::test]
async fn test_update_reassigns_teacher_symmetrically() {
    let app = setup_test_app();
    let old_teacher = create_teacher(&app, "John Doe", "1985-05-15").await;
    let new_teacher = create_teacher(&app, "Mary Major", "1979-11-30").await;
    let class_id = create_course_class(&app, old_teacher).await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/course-classes/{class_id}"),
        Some(json!({ "teacher_id": new_teacher })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Course class updated successfully");

    let (_, body) = request(&app, "GET", &format!("/course-classes/{class_id}"), None).await;
    assert_eq!(body["teacher_id"], new_teacher);

    // The class moved between the two teachers' class lists.
    let (_, body) = request(
        &app,
        "GET",
        &format!("/teachers/{old_teacher}/course-classes"),
        None,
    )
    .await;
    assert_eq!(body["course_classes"].as_array().unwrap().len(), 0);

    let (_, body) = request(
        &app,
        "GET",
        &format!("/teachers/{new_teacher}/course-classes"),
        None,
    )
    .await;
    let ids: Vec<u64> = body["course_classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![class_id]);
}

#[tokio::test]
async fn test_update_course_class_unknown_teacher() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;
    let class_id = create_course_class(&app, teacher_id).await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/course-classes/{class_id}"),
        Some(json!({ "teacher_id": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The assignment did not change.
    let (_, body) = request(&app, "GET", &format!("/course-classes/{class_id}"), None).await;
    assert_eq!(body["teacher_id"], teacher_id);
}

#[tokio::test]
async fn test_delete_course_class_frees_the_teacher() {
    let app = setup_test_app();
    let teacher_id = create_teacher(&app, "John Doe", "1985-05-15").await;
    let class_id = create_course_class(&app, teacher_id).await;

    let (status, _) = request(&app, "DELETE", &format!("/course-classes/{class_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "GET", &format!("/course-classes/{class_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // With its only class gone, the teacher can now be deleted.
    let (status, _) = request(&app, "DELETE", &format!("/teachers/{teacher_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_course_class_not_found() {
    let app = setup_test_app();

    let (status, _) = request(&app, "DELETE", "/course-classes/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
