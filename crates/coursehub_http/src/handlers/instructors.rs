//! `/api/instructors` endpoints.

use super::{created, done, ActionResponse, Created};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use coursehub_core::{Instructor, InstructorInput};

/// GET /api/instructors
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Instructor>>, ApiError> {
    let instructors = state
        .read_catalog("instructor_list", |catalog| {
            catalog.instructors.list_instructors()
        })
        .await?;
    Ok(Json(instructors))
}

/// GET /api/instructors/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Instructor>, ApiError> {
    let instructor = state
        .read_catalog("instructor_get", move |catalog| {
            catalog.instructors.get_instructor(id)
        })
        .await?;
    Ok(Json(instructor))
}

/// POST /api/instructors
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<InstructorInput>,
) -> Result<Created, ApiError> {
    let id = state
        .with_catalog("instructor_create", move |catalog| {
            catalog.instructors.create_instructor(input)
        })
        .await?;
    Ok(created("instructor created", id))
}

/// PUT /api/instructors/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<InstructorInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("instructor_update", move |catalog| {
            catalog.instructors.update_instructor(id, input)
        })
        .await?;
    Ok(done("instructor updated"))
}

/// DELETE /api/instructors/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("instructor_delete", move |catalog| {
            catalog.instructors.delete_instructor(id)
        })
        .await?;
    Ok(done("instructor deleted"))
}
