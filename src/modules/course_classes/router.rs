use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    create_course_class, delete_course_class, enroll_student, get_course_class,
    get_course_class_students, get_course_classes, unenroll_student, update_course_class,
};

pub fn init_course_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course_class).get(get_course_classes))
        .route(
            "/{id}",
            get(get_course_class)
                .put(update_course_class)
                .delete(delete_course_class),
        )
        .route(
            "/{id}/students",
            post(enroll_student).get(get_course_class_students),
        )
        .route("/{id}/students/{student_id}", delete(unenroll_student))
}
