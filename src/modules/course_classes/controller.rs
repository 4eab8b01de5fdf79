use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::course_classes::model::{
    CourseClassResponse, CourseClassStudentsResponse, CourseClassesResponse, CreateCourseClassDto,
    EnrollStudentDto, UpdateCourseClassDto,
};
use crate::modules::course_classes::service::CourseClassService;
use crate::state::AppState;
use crate::store::entity::EntityId;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/course-classes",
    request_body = CreateCourseClassDto,
    responses(
        (status = 201, description = "Course class created successfully", body = CreatedResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn create_course_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseClassDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let created = CourseClassService::create_course_class(&state.store, dto)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/course-classes",
    responses(
        (status = 200, description = "List of course classes", body = CourseClassesResponse)
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn get_course_classes(State(state): State<AppState>) -> Json<CourseClassesResponse> {
    Json(CourseClassService::get_course_classes(&state.store))
}

#[utoipa::path(
    get,
    path = "/course-classes/{id}",
    params(
        ("id" = u64, Path, description = "Course class ID")
    ),
    responses(
        (status = 200, description = "Course class details", body = CourseClassResponse),
        (status = 404, description = "Course class not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn get_course_class(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CourseClassResponse>, AppError> {
    let class = CourseClassService::get_course_class_by_id(&state.store, id)?;
    Ok(Json(class))
}

#[utoipa::path(
    put,
    path = "/course-classes/{id}",
    params(
        ("id" = u64, Path, description = "Course class ID")
    ),
    request_body = UpdateCourseClassDto,
    responses(
        (status = 200, description = "Course class updated successfully", body = MessageResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 404, description = "Course class or teacher not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn update_course_class(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseClassDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = CourseClassService::update_course_class(&state.store, id, dto)?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/course-classes/{id}",
    params(
        ("id" = u64, Path, description = "Course class ID")
    ),
    responses(
        (status = 204, description = "Course class deleted"),
        (status = 404, description = "Course class not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn delete_course_class(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    CourseClassService::delete_course_class(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/course-classes/{id}/students",
    params(
        ("id" = u64, Path, description = "Course class ID")
    ),
    responses(
        (status = 200, description = "Enrolled students and the teacher summary", body = CourseClassStudentsResponse),
        (status = 404, description = "Course class not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn get_course_class_students(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CourseClassStudentsResponse>, AppError> {
    let response = CourseClassService::get_course_class_students(&state.store, id)?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/course-classes/{id}/students",
    params(
        ("id" = u64, Path, description = "Course class ID")
    ),
    request_body = EnrollStudentDto,
    responses(
        (status = 200, description = "Student enrolled", body = MessageResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 404, description = "Course class or student not found")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(dto): ValidatedJson<EnrollStudentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = CourseClassService::enroll_student(&state.store, id, dto)?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/course-classes/{id}/students/{student_id}",
    params(
        ("id" = u64, Path, description = "Course class ID"),
        ("student_id" = u64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student unenrolled", body = MessageResponse),
        (status = 404, description = "Course class not found or student not enrolled")
    ),
    tag = "Course Classes"
)]
#[instrument(skip(state))]
pub async fn unenroll_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(EntityId, EntityId)>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = CourseClassService::unenroll_student(&state.store, id, student_id)?;
    Ok(Json(message))
}
