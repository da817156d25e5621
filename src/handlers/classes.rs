//! Class handlers: resolved listing, raw record API, and the edit path.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::model::Class;
use crate::state::AppState;
use crate::store::Stored;
use crate::views::{self, ClassView};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

/// GET /classes — classes with their teacher's name resolved.
pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassView>>, AppError> {
    Ok(Json(views::classes(&state.db).await?))
}

/// GET /api/classes — raw class records with `_id`.
pub async fn api_list_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Class>>>, AppError> {
    Ok(Json(state.db.classes.find_all().await?))
}

/// POST /api/classes — store the record as given, return it with `_id`.
/// `teacher_id` is not checked against the teacher collection; a dangling
/// assignment renders as "Unknown" at read time.
pub async fn api_create_class(
    State(state): State<AppState>,
    Json(class): Json<Class>,
) -> Result<(StatusCode, Json<Stored<Class>>), AppError> {
    let id = state.db.classes.insert(&class).await?;
    Ok((StatusCode::CREATED, Json(Stored { id, doc: class })))
}

/// Fields the edit path may change. Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct ClassUpdate {
    pub name: Option<String>,
    pub teacher_id: Option<RecordId>,
    pub schedule: Option<String>,
}

/// PATCH /api/classes/:id — edit name, teacher assignment, or the free-form
/// schedule note. Unknown id is a 404, not a silent success.
pub async fn api_update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ClassUpdate>,
) -> Result<Json<Stored<Class>>, AppError> {
    let id = RecordId::parse(&id)?;
    let mut fields = serde_json::Map::new();
    if let Some(name) = update.name {
        fields.insert("name".into(), Value::String(name));
    }
    if let Some(teacher_id) = update.teacher_id {
        fields.insert("teacher_id".into(), Value::String(teacher_id.to_string()));
    }
    if let Some(schedule) = update.schedule {
        fields.insert("schedule".into(), Value::String(schedule));
    }
    let updated = state
        .db
        .classes
        .update_fields(&id, &fields)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("class {}", id)))?;
    Ok(Json(updated))
}
