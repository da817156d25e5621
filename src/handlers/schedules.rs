//! Schedule handlers: full listing, per-teacher and per-class filters, raw
//! record API.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::model::Schedule;
use crate::state::AppState;
use crate::store::Stored;
use crate::views::{self, ClassSchedulePage, ScheduleView, TeacherSchedulePage};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// GET /schedules — every slot with class and teacher names resolved.
pub async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleView>>, AppError> {
    Ok(Json(views::schedules(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct TeacherScheduleParams {
    pub teacher_id: Option<String>,
}

/// GET /schedules/teacher?teacher_id=… — one teacher's timetable. Without a
/// selected teacher this is a prompt-the-user condition, not a fault.
pub async fn teacher_schedules(
    State(state): State<AppState>,
    Query(params): Query<TeacherScheduleParams>,
) -> Result<Json<TeacherSchedulePage>, AppError> {
    let raw = params
        .teacher_id
        .ok_or(AppError::MissingSelection("teacher"))?;
    let teacher_id = RecordId::parse(&raw)?;
    Ok(Json(views::teacher_schedules(&state.db, &teacher_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct ClassScheduleParams {
    pub class_id: Option<String>,
}

/// GET /schedules/class?class_id=… — one class's timetable.
pub async fn class_schedules(
    State(state): State<AppState>,
    Query(params): Query<ClassScheduleParams>,
) -> Result<Json<ClassSchedulePage>, AppError> {
    let raw = params.class_id.ok_or(AppError::MissingSelection("class"))?;
    let class_id = RecordId::parse(&raw)?;
    Ok(Json(views::class_schedules(&state.db, &class_id).await?))
}

/// GET /api/schedules — raw schedule records with `_id`.
pub async fn api_list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Schedule>>>, AppError> {
    Ok(Json(state.db.schedules.find_all().await?))
}

/// POST /api/schedules — store the record as given, return it with `_id`.
/// Neither reference is checked against its collection at write time.
pub async fn api_create_schedule(
    State(state): State<AppState>,
    Json(schedule): Json<Schedule>,
) -> Result<(StatusCode, Json<Stored<Schedule>>), AppError> {
    let id = state.db.schedules.insert(&schedule).await?;
    Ok((StatusCode::CREATED, Json(Stored { id, doc: schedule })))
}
