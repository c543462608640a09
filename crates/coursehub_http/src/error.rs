//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"error": "<message>"}` with the
//! status derived from the catalog error kind.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coursehub_core::{DbError, ErrorKind, RepoError, ServiceError};
use log::error;
use serde_json::json;
use std::fmt::{Display, Formatter};
use tokio::task::JoinError;

/// Error returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Locked => StatusCode::FORBIDDEN,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        Self::new(status_for(value.kind()), value.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        ServiceError::from(value).into()
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(value: rusqlite::Error) -> Self {
        ServiceError::from(value).into()
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        error!(
            "event=db_unavailable module=http status=error error={}",
            value
        );
        Self::internal(format!("database unavailable: {value}"))
    }
}

impl From<JoinError> for ApiError {
    fn from(value: JoinError) -> Self {
        error!(
            "event=catalog_task module=http status=error error={}",
            value
        );
        Self::internal("request worker failed")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("invalid JSON body: {}", value.body_text()),
        )
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::not_found(format!("resource not found: {}", value.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
