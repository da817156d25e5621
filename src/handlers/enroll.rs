//! Enrollment: the form options and the atomic add-if-absent itself.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::model::{Class, Student};
use crate::state::AppState;
use crate::store::Stored;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// What the enrollment form is populated from: every student and class, raw.
#[derive(Debug, Serialize)]
pub struct EnrollOptions {
    pub students: Vec<Stored<Student>>,
    pub classes: Vec<Stored<Class>>,
}

/// GET /enroll — listing of students and classes to pick from.
pub async fn enroll_options(
    State(state): State<AppState>,
) -> Result<Json<EnrollOptions>, AppError> {
    Ok(Json(EnrollOptions {
        students: state.db.students.find_all().await?,
        classes: state.db.classes.find_all().await?,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: String,
    pub class_id: String,
}

/// POST /enroll — add the class to the student's `class_ids` if absent.
/// Idempotent; enrolling twice leaves the record as after the first call.
/// The class id is not checked for existence (a dangling enrollment simply
/// never shows up in the student's resolved class names).
pub async fn enroll(
    State(state): State<AppState>,
    Json(req): Json<EnrollRequest>,
) -> Result<Json<Stored<Student>>, AppError> {
    let student_id = RecordId::parse(&req.student_id)?;
    let class_id = RecordId::parse(&req.class_id)?;
    let student = state
        .db
        .students
        .add_to_set(&student_id, "class_ids", &class_id.to_string())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", student_id)))?;
    Ok(Json(student))
}
