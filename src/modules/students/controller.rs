use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::students::model::{
    CreateStudentDto, StudentClassesResponse, StudentResponse, StudentsResponse, UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::store::entity::EntityId;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = CreatedResponse),
        (status = 400, description = "Missing or malformed fields, or a bad date")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let created = StudentService::create_student(&state.store, dto)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "List of students", body = StudentsResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Json<StudentsResponse> {
    Json(StudentService::get_students(&state.store))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = u64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = StudentService::get_student_by_id(&state.store, id)?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = u64, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = MessageResponse),
        (status = 400, description = "Bad date"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = StudentService::update_student(&state.store, id, dto)?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(
        ("id" = u64, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    StudentService::delete_student(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/students/{id}/course-classes",
    params(
        ("id" = u64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Classes the student is enrolled in", body = StudentClassesResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_course_classes(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<StudentClassesResponse>, AppError> {
    let response = StudentService::get_student_course_classes(&state.store, id)?;
    Ok(Json(response))
}
