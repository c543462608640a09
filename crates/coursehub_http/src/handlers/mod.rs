//! Route handlers, one module per resource.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

pub mod courses;
pub mod health;
pub mod instructors;
pub mod lessons;
pub mod modules;

/// Body returned by every write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

pub type Created = (StatusCode, Json<ActionResponse>);

pub(crate) fn created(message: &str, id: i64) -> Created {
    (
        StatusCode::CREATED,
        Json(ActionResponse {
            message: message.to_string(),
            id: Some(id),
        }),
    )
}

pub(crate) fn done(message: impl Into<String>) -> Json<ActionResponse> {
    Json(ActionResponse {
        message: message.into(),
        id: None,
    })
}
