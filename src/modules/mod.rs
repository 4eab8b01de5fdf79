pub mod course_classes;
pub mod students;
pub mod teachers;
