//! Listing routes: assembled views for the page-level listings, plus
//! enrollment.

use crate::handlers::classes::list_classes;
use crate::handlers::enroll::{enroll, enroll_options};
use crate::handlers::schedules::{class_schedules, list_schedules, teacher_schedules};
use crate::handlers::students::list_students;
use crate::handlers::teachers::list_teachers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list_students))
        .route("/teachers", get(list_teachers))
        .route("/classes", get(list_classes))
        .route("/schedules", get(list_schedules))
        .route("/schedules/teacher", get(teacher_schedules))
        .route("/schedules/class", get(class_schedules))
        .route("/enroll", get(enroll_options).post(enroll))
        .with_state(state)
}
