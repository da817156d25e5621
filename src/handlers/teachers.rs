//! Teacher handlers: listing with taught classes, raw record API.

use crate::error::AppError;
use crate::model::Teacher;
use crate::state::AppState;
use crate::store::Stored;
use crate::views::{self, TeacherView};
use axum::{extract::State, http::StatusCode, Json};

/// GET /teachers — teachers with the classes they teach.
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherView>>, AppError> {
    Ok(Json(views::teachers(&state.db).await?))
}

/// GET /api/teachers — raw teacher records with `_id`.
pub async fn api_list_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Teacher>>>, AppError> {
    Ok(Json(state.db.teachers.find_all().await?))
}

/// POST /api/teachers — store the record as given, return it with `_id`.
pub async fn api_create_teacher(
    State(state): State<AppState>,
    Json(teacher): Json<Teacher>,
) -> Result<(StatusCode, Json<Stored<Teacher>>), AppError> {
    let id = state.db.teachers.insert(&teacher).await?;
    Ok((StatusCode::CREATED, Json(Stored { id, doc: teacher })))
}
