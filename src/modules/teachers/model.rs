//! Teacher domain model and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::course_classes::model::CourseClassResponse;
use crate::modules::students::model::StudentResponse;
use crate::store::assoc::IdSet;
use crate::store::entity::{EntityId, EntityMeta, PersonDetails};

/// A teacher held in the store.
///
/// `classes` carries the ids of the course classes this teacher teaches;
/// the store keeps it in sync with each class's `teacher_id`.
#[derive(Debug, Clone)]
pub struct Teacher {
    pub meta: EntityMeta,
    pub details: PersonDetails,
    pub classes: IdSet,
}

/// DTO for creating a new teacher.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Birth date in `YYYY-MM-DD` format.
    pub birthdate: String,
}

/// DTO for updating an existing teacher.
///
/// All fields are optional; only provided fields will be updated.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// Birth date in `YYYY-MM-DD` format.
    pub birthdate: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: EntityId,
    pub name: String,
    pub birthdate: NaiveDate,
    /// Whole years, derived from the birth date at read time.
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Teacher> for TeacherResponse {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.meta.id,
            name: teacher.details.name.clone(),
            birthdate: teacher.details.birthdate,
            age: teacher.details.age(),
            created_at: teacher.meta.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeachersResponse {
    pub teachers: Vec<TeacherResponse>,
}

/// Short form used when a teacher heads a related listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherSummary {
    pub id: EntityId,
    pub name: String,
}

impl From<&Teacher> for TeacherSummary {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.meta.id,
            name: teacher.details.name.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherClassesResponse {
    pub teacher: TeacherSummary,
    pub course_classes: Vec<CourseClassResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherStudentsResponse {
    pub teacher: TeacherSummary,
    pub students: Vec<StudentResponse>,
}
