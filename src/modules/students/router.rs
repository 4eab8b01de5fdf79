use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, get_student, get_student_course_classes, get_students,
    update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/{id}/course-classes", get(get_student_course_classes))
}
