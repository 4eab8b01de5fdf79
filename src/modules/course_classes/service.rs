use anyhow::anyhow;
use tracing::instrument;

use crate::modules::course_classes::model::{
    CourseClassResponse, CourseClassStudentsResponse, CourseClassesResponse, CreateCourseClassDto,
    EnrollStudentDto, UpdateCourseClassDto,
};
use crate::modules::students::model::StudentResponse;
use crate::modules::teachers::model::TeacherSummary;
use crate::store::entity::EntityId;
use crate::store::SharedStore;
use crate::utils::errors::AppError;
use crate::utils::responses::{CreatedResponse, MessageResponse};

pub struct CourseClassService;

impl CourseClassService {
    /// A class is never created without its teacher; a dangling
    /// `teacher_id` rejects the request.
    #[instrument(skip(store))]
    pub fn create_course_class(
        store: &SharedStore,
        dto: CreateCourseClassDto,
    ) -> Result<CreatedResponse, AppError> {
        let id = store
            .write()
            .add_course_class(dto.teacher_id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        Ok(CreatedResponse::new(id, "Course class created successfully"))
    }

    #[instrument(skip(store))]
    pub fn get_course_classes(store: &SharedStore) -> CourseClassesResponse {
        let course_classes = store.read().course_classes();
        CourseClassesResponse {
            course_classes: course_classes
                .iter()
                .map(CourseClassResponse::from)
                .collect(),
        }
    }

    #[instrument(skip(store))]
    pub fn get_course_class_by_id(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<CourseClassResponse, AppError> {
        let store = store.read();
        let class = store
            .course_class(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Course class not found")))?;
        Ok(CourseClassResponse::from(class))
    }

    /// Reassigns the class to another teacher. Both teachers' class maps
    /// follow the move.
    #[instrument(skip(store))]
    pub fn update_course_class(
        store: &SharedStore,
        id: EntityId,
        dto: UpdateCourseClassDto,
    ) -> Result<MessageResponse, AppError> {
        let mut store = store.write();
        if store.course_class(id).is_none() {
            return Err(AppError::not_found(anyhow!("Course class not found")));
        }
        if store.teacher(dto.teacher_id).is_none() {
            return Err(AppError::not_found(anyhow!("Teacher not found")));
        }
        store.reassign_course_class_teacher(id, dto.teacher_id);
        Ok(MessageResponse::new("Course class updated successfully"))
    }

    #[instrument(skip(store))]
    pub fn delete_course_class(store: &SharedStore, id: EntityId) -> Result<(), AppError> {
        if !store.write().delete_course_class(id) {
            return Err(AppError::not_found(anyhow!("Course class not found")));
        }
        Ok(())
    }

    #[instrument(skip(store))]
    pub fn get_course_class_students(
        store: &SharedStore,
        id: EntityId,
    ) -> Result<CourseClassStudentsResponse, AppError> {
        let store = store.read();
        let class = store
            .course_class(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Course class not found")))?;
        let teacher = store
            .teacher(class.teacher_id)
            .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;
        let students = store
            .students_of_class(id)
            .unwrap_or_default()
            .into_iter()
            .map(StudentResponse::from)
            .collect();
        Ok(CourseClassStudentsResponse {
            teacher: TeacherSummary::from(teacher),
            students,
        })
    }

    /// Enrolls the student in the class. Both sides of the relationship
    /// update under one write lock; enrolling an already enrolled student
    /// succeeds without changing anything.
    #[instrument(skip(store))]
    pub fn enroll_student(
        store: &SharedStore,
        class_id: EntityId,
        dto: EnrollStudentDto,
    ) -> Result<MessageResponse, AppError> {
        let mut store = store.write();
        if store.course_class(class_id).is_none() {
            return Err(AppError::not_found(anyhow!("Course class not found")));
        }
        if store.student(dto.student_id).is_none() {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }
        store.enroll_student(dto.student_id, class_id);
        Ok(MessageResponse::new("Student enrolled successfully"))
    }

    /// Unenrolls the student. The student must actually be enrolled in this
    /// class, not merely exist.
    #[instrument(skip(store))]
    pub fn unenroll_student(
        store: &SharedStore,
        class_id: EntityId,
        student_id: EntityId,
    ) -> Result<MessageResponse, AppError> {
        let mut store = store.write();
        let class = store
            .course_class(class_id)
            .ok_or_else(|| AppError::not_found(anyhow!("Course class not found")))?;
        if !class.students.contains(student_id) {
            return Err(AppError::not_found(anyhow!(
                "Student not enrolled in this course class"
            )));
        }
        store.unenroll_student(student_id, class_id);
        Ok(MessageResponse::new("Student unenrolled successfully"))
    }
}
