//! Course class domain model and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::students::model::StudentResponse;
use crate::modules::teachers::model::TeacherSummary;
use crate::store::assoc::IdSet;
use crate::store::entity::{EntityId, EntityMeta};

/// A course class held in the store.
///
/// Always taught by exactly one teacher. `students` carries the ids of the
/// enrolled students; the store keeps it symmetric with each student's
/// class map.
#[derive(Debug, Clone)]
pub struct CourseClass {
    pub meta: EntityMeta,
    pub teacher_id: EntityId,
    pub students: IdSet,
}

/// DTO for creating a new course class.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCourseClassDto {
    pub teacher_id: EntityId,
}

/// DTO for reassigning the class to another teacher.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCourseClassDto {
    pub teacher_id: EntityId,
}

/// DTO for enrolling a student into the class.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EnrollStudentDto {
    pub student_id: EntityId,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseClassResponse {
    pub id: EntityId,
    pub teacher_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl From<&CourseClass> for CourseClassResponse {
    fn from(class: &CourseClass) -> Self {
        Self {
            id: class.meta.id,
            teacher_id: class.teacher_id,
            created_at: class.meta.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseClassesResponse {
    pub course_classes: Vec<CourseClassResponse>,
}

/// Roster of a class: the teacher's summary plus the enrolled students in
/// enrollment order.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseClassStudentsResponse {
    pub teacher: TeacherSummary,
    pub students: Vec<StudentResponse>,
}
