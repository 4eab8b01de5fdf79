use utoipa::OpenApi;

use crate::modules::course_classes::model::{
    CourseClassResponse, CourseClassStudentsResponse, CourseClassesResponse, CreateCourseClassDto,
    EnrollStudentDto, UpdateCourseClassDto,
};
use crate::modules::students::model::{
    CreateStudentDto, StudentClassesResponse, StudentResponse, StudentSummary, StudentsResponse,
    UpdateStudentDto,
};
use crate::modules::teachers::model::{
    CreateTeacherDto, TeacherClassesResponse, TeacherResponse, TeacherStudentsResponse,
    TeacherSummary, TeachersResponse, UpdateTeacherDto,
};
use crate::utils::responses::{CreatedResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::get_student_course_classes,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::get_teacher_course_classes,
        crate::modules::teachers::controller::get_teacher_students,
        crate::modules::course_classes::controller::create_course_class,
        crate::modules::course_classes::controller::get_course_classes,
        crate::modules::course_classes::controller::get_course_class,
        crate::modules::course_classes::controller::update_course_class,
        crate::modules::course_classes::controller::delete_course_class,
        crate::modules::course_classes::controller::get_course_class_students,
        crate::modules::course_classes::controller::enroll_student,
        crate::modules::course_classes::controller::unenroll_student,
    ),
    components(
        schemas(
            CreateStudentDto,
            UpdateStudentDto,
            StudentResponse,
            StudentsResponse,
            StudentSummary,
            StudentClassesResponse,
            CreateTeacherDto,
            UpdateTeacherDto,
            TeacherResponse,
            TeachersResponse,
            TeacherSummary,
            TeacherClassesResponse,
            TeacherStudentsResponse,
            CreateCourseClassDto,
            UpdateCourseClassDto,
            EnrollStudentDto,
            CourseClassResponse,
            CourseClassesResponse,
            CourseClassStudentsResponse,
            CreatedResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student management endpoints"),
        (name = "Teachers", description = "Teacher management endpoints"),
        (name = "Course Classes", description = "Course class and enrollment endpoints")
    ),
    info(
        title = "Rollbook API",
        version = "0.1.0",
        description = "In-memory school management REST API: students, teachers, course classes, and enrollment.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
