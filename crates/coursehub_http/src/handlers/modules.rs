//! `/api/modules` endpoints, including lesson creation.

use super::{created, done, ActionResponse, Created};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use coursehub_core::{Lesson, LessonInput, ModuleInput, ModuleWithLessons};

/// GET /api/modules/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ModuleWithLessons>, ApiError> {
    let module = state
        .read_catalog("module_get", move |catalog| catalog.modules.get_module(id))
        .await?;
    Ok(Json(module))
}

/// PUT /api/modules/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<ModuleInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("module_update", move |catalog| {
            catalog.modules.rename_module(id, input)
        })
        .await?;
    Ok(done("module updated"))
}

/// DELETE /api/modules/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("module_delete", move |catalog| {
            catalog.modules.delete_module(id)
        })
        .await?;
    Ok(done("module and its lessons deleted"))
}

/// GET /api/modules/:id/lessons
pub async fn list_lessons(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = state
        .read_catalog("lesson_list", move |catalog| {
            catalog.modules.list_lessons(id)
        })
        .await?;
    Ok(Json(lessons))
}

/// POST /api/modules/:id/lessons
pub async fn create_lesson(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<LessonInput>,
) -> Result<Created, ApiError> {
    let lesson_id = state
        .with_catalog("lesson_create", move |catalog| {
            catalog.modules.add_lesson(id, input)
        })
        .await?;
    Ok(created("lesson created", lesson_id))
}
