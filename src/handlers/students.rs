//! Student handlers: resolved listing plus the raw record API.

use crate::error::AppError;
use crate::model::Student;
use crate::state::AppState;
use crate::store::Stored;
use crate::views::{self, StudentView};
use axum::{extract::State, http::StatusCode, Json};

/// GET /students — students with enrolled class names resolved.
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentView>>, AppError> {
    Ok(Json(views::students(&state.db).await?))
}

/// GET /api/students — raw student records with `_id`.
pub async fn api_list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Student>>>, AppError> {
    Ok(Json(state.db.students.find_all().await?))
}

/// POST /api/students — store the record as given and return it with its
/// new `_id`. Duplicate class references in the body are dropped, first
/// occurrence wins.
pub async fn api_create_student(
    State(state): State<AppState>,
    Json(mut student): Json<Student>,
) -> Result<(StatusCode, Json<Stored<Student>>), AppError> {
    student.dedup_class_ids();
    let id = state.db.students.insert(&student).await?;
    Ok((StatusCode::CREATED, Json(Stored { id, doc: student })))
}
