use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::teachers::model::{
    CreateTeacherDto, TeacherClassesResponse, TeacherResponse, TeacherStudentsResponse,
    TeachersResponse, UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::store::entity::EntityId;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created successfully", body = CreatedResponse),
        (status = 400, description = "Missing or malformed fields, or a bad date")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let created = TeacherService::create_teacher(&state.store, dto)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "List of teachers", body = TeachersResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Json<TeachersResponse> {
    Json(TeacherService::get_teachers(&state.store))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = TeacherResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<TeacherResponse>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.store, id)?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = MessageResponse),
        (status = 400, description = "Bad date"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = TeacherService::update_teacher(&state.store, id, dto)?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found"),
        (status = 409, description = "Teacher still assigned to course classes")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    TeacherService::delete_teacher(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/teachers/{id}/course-classes",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Classes the teacher teaches", body = TeacherClassesResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_course_classes(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<TeacherClassesResponse>, AppError> {
    let response = TeacherService::get_teacher_course_classes(&state.store, id)?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}/students",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Distinct students across the teacher's classes", body = TeacherStudentsResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_students(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<TeacherStudentsResponse>, AppError> {
    let response = TeacherService::get_teacher_students(&state.store, id)?;
    Ok(Json(response))
}
