use super::{done, ActionResponse};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use coursehub_core::{Lesson, LessonInput};

/// GET /api/lessons/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Lesson>, ApiError> {
    let lesson = state
        .read_catalog("lesson_get", move |catalog| catalog.lessons.get_lesson(id))
        .await?;
    Ok(Json(lesson))
}

/// PUT /api/lessons/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<LessonInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("lesson_update", move |catalog| {
            catalog.lessons.update_lesson(id, input)
        })
        .await?;
    Ok(done("lesson updated"))
}

/// DELETE /api/lessons/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("lesson_delete", move |catalog| {
            catalog.lessons.delete_lesson(id)
        })
        .await?;
    Ok(done("lesson deleted"))
}
