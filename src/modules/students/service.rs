use anyhow::anyhow;
use tracing::instrument;

use crate::modules::course_classes::model::CourseClassResponse;
use crate::modules::students::model::{
    CreateStudentDto, StudentClassesResponse, StudentResponse, StudentSummary, StudentsResponse,
    UpdateStudentDto,
};
use crate::store::entity::{EntityId, PersonDetails};
use crate::store::SharedStore;
use crate::utils::date::parse_birthdate;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store, dto))]
    pub fn create_student(
        store: &SharedStore,
        dto: CreateStudentDto,
    ) -> Result<CreatedResponse, AppError> {
        let birthdate = parse_birthdate(&dto.birthdate)?;
        let id = store
            .write()
            .add_student(PersonDetails::new(dto.name, birthdate));
        Ok(CreatedResponse::new(id, "Student created successfully"))
    }

    #[instrument(skip(store))]
    pub fn get_students(store: &SharedStore) -> StudentsResponse {
        let students = store.read().students();
        StudentsResponse {
            students: students.iter().map(StudentResponse::from).collect(),
        }
    }

    #[instrument(skip(store))]
    pub fn get_student_by_id(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<StudentResponse, AppError> {
        let store = store.read();
        let student = store
            .student(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))?;
        Ok(StudentResponse::from(student))
    }

    /// Parses the incoming fields before touching the store, so a bad date
    /// leaves the stored student untouched.
    #[instrument(skip(store, dto))]
    pub fn update_student(
        store: &SharedStore,
        id: EntityId,
        dto: UpdateStudentDto,
    ) -> Result<MessageResponse, AppError> {
        let birthdate = dto.birthdate.as_deref().map(parse_birthdate).transpose()?;
        if !store.write().update_student(id, dto.name, birthdate) {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }
        Ok(MessageResponse::new("Student updated successfully"))
    }

    #[instrument(skip(store))]
    pub fn delete_student(store: &SharedStore, id: EntityId) -> Result<(), AppError> {
        if !store.write().delete_student(id) {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }
        Ok(())
    }

    #[instrument(skip(store))]
    pub fn get_student_course_classes(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<StudentClassesResponse, AppError> {
        let store = store.read();
        let student = store
            .student(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))?;
        let course_classes = store
            .classes_of_student(id)
            .unwrap_or_default()
            .into_iter()
            .map(CourseClassResponse::from)
            .collect();
        Ok(StudentClassesResponse {
            student: StudentSummary::from(student),
            course_classes,
        })
    }
}
