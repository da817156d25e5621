//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed identifier string from a route, query, or body field.
    #[error("invalid identifier: '{0}'")]
    InvalidId(String),
    /// A request named a specific record that does not exist. Resolver-level
    /// absence never takes this path; it is recovered in place.
    #[error("not found: {0}")]
    NotFound(String),
    /// A filtered listing was requested without choosing what to filter by.
    #[error("no {0} selected")]
    MissingSelection(&'static str),
    /// A stored document or key failed to decode. Storage-level fault.
    #[error("record encoding: {0}")]
    Encoding(String),
    #[error("storage: {0}")]
    Storage(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_identifier"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::MissingSelection(_) => (StatusCode::BAD_REQUEST, "missing_selection"),
            AppError::Encoding(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_unavailable"),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
