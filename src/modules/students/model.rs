//! Student domain model and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::course_classes::model::CourseClassResponse;
use crate::store::assoc::IdSet;
use crate::store::entity::{EntityId, EntityMeta, PersonDetails};

/// A student held in the store.
///
/// `enrolled_classes` carries the ids of the course classes the student is
/// enrolled in; the store keeps it symmetric with each class's roster.
#[derive(Debug, Clone)]
pub struct Student {
    pub meta: EntityMeta,
    pub details: PersonDetails,
    pub enrolled_classes: IdSet,
}

/// DTO for creating a new student.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Birth date in `YYYY-MM-DD` format.
    pub birthdate: String,
}

/// DTO for updating an existing student.
///
/// All fields are optional; only provided fields will be updated.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// Birth date in `YYYY-MM-DD` format.
    pub birthdate: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: EntityId,
    pub name: String,
    pub birthdate: NaiveDate,
    /// Whole years, derived from the birth date at read time.
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.meta.id,
            name: student.details.name.clone(),
            birthdate: student.details.birthdate,
            age: student.details.age(),
            created_at: student.meta.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentsResponse {
    pub students: Vec<StudentResponse>,
}

/// Short form used when a student heads a related listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentSummary {
    pub id: EntityId,
    pub name: String,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            id: student.meta.id,
            name: student.details.name.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentClassesResponse {
    pub student: StudentSummary,
    pub course_classes: Vec<CourseClassResponse>,
}
