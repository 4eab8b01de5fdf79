use anyhow::anyhow;
use tracing::instrument;

use crate::modules::course_classes::model::CourseClassResponse;
use crate::modules::students::model::StudentResponse;
use crate::modules::teachers::model::{
    CreateTeacherDto, TeacherClassesResponse, TeacherResponse, TeacherStudentsResponse,
    TeacherSummary, TeachersResponse, UpdateTeacherDto,
};
use crate::store::entity::{EntityId, PersonDetails};
use crate::store::SharedStore;
use crate::utils::date::parse_birthdate;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(store, dto))]
    pub fn create_teacher(
        store: &SharedStore,
        dto: CreateTeacherDto,
    ) -> Result<CreatedResponse, AppError> {
        let birthdate = parse_birthdate(&dto.birthdate)?;
        let id = store
            .write()
            .add_teacher(PersonDetails::new(dto.name, birthdate));
        Ok(CreatedResponse::new(id, "Teacher created successfully"))
    }

    #[instrument(skip(store))]
    pub fn get_teachers(store: &SharedStore) -> TeachersResponse {
        let teachers = store.read().teachers();
        TeachersResponse {
            teachers: teachers.iter().map(TeacherResponse::from).collect(),
        }
    }

    #[instrument(skip(store))]
    pub fn get_teacher_by_id(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<TeacherResponse, AppError> {
        let store = store.read();
        let teacher = store
            .teacher(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        Ok(TeacherResponse::from(teacher))
    }

    /// Parses the incoming fields before touching the store, so a bad date
    /// leaves the stored teacher untouched.
    #[instrument(skip(store, dto))]
    pub fn update_teacher(
        store: &SharedStore,
        id: EntityId,
        dto: UpdateTeacherDto,
    ) -> Result<MessageResponse, AppError> {
        let birthdate = dto.birthdate.as_deref().map(parse_birthdate).transpose()?;
        if !store.write().update_teacher(id, dto.name, birthdate) {
            return Err(AppError::not_found(anyhow!("Teacher not found")));
        }
        Ok(MessageResponse::new("Teacher updated successfully"))
    }

    /// A teacher that still teaches classes cannot be deleted: every class
    /// must keep exactly one teacher, and dropping the classes behind the
    /// caller's back would be worse than refusing.
    #[instrument(skip(store))]
    pub fn delete_teacher(store: &SharedStore, id: EntityId) -> Result<(), AppError> {
        let mut store = store.write();
        let teacher = store
            .teacher(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        if !teacher.classes.is_empty() {
            return Err(AppError::conflict(anyhow!(
                "Teacher is still assigned to one or more course classes"
            )));
        }
        store.delete_teacher(id);
        Ok(())
    }

    #[instrument(skip(store))]
    pub fn get_teacher_course_classes(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<TeacherClassesResponse, AppError> {
        let store = store.read();
        let teacher = store
            .teacher(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        let course_classes = store
            .classes_of_teacher(id)
            .unwrap_or_default()
            .into_iter()
            .map(CourseClassResponse::from)
            .collect();
        Ok(TeacherClassesResponse {
            teacher: TeacherSummary::from(teacher),
            course_classes,
        })
    }

    /// Distinct students across every class the teacher teaches.
    #[instrument(skip(store))]
    pub fn get_teacher_students(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<TeacherStudentsResponse, AppError> {
        let store = store.read();
        let teacher = store
            .teacher(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        let students = store
            .students_of_teacher(id)
            .unwrap_or_default()
            .into_iter()
            .map(StudentResponse::from)
            .collect();
        Ok(TeacherStudentsResponse {
            teacher: TeacherSummary::from(teacher),
            students,
        })
    }
}
