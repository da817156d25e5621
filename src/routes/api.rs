//! Raw record routes under /api: list and create per collection, plus the
//! class edit path.

use crate::handlers::classes::{api_create_class, api_list_classes, api_update_class};
use crate::handlers::schedules::{api_create_schedule, api_list_schedules};
use crate::handlers::students::{api_create_student, api_list_students};
use crate::handlers::teachers::{api_create_teacher, api_list_teachers};
use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/students", get(api_list_students).post(api_create_student))
        .route("/api/teachers", get(api_list_teachers).post(api_create_teacher))
        .route("/api/classes", get(api_list_classes).post(api_create_class))
        .route("/api/classes/:id", patch(api_update_class))
        .route("/api/schedules", get(api_list_schedules).post(api_create_schedule))
        .with_state(state)
}
