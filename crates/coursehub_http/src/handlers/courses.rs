//! `/api/courses` endpoints, including publish and module creation.

use super::{created, done, ActionResponse, Created};
use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use coursehub_core::{CourseDetail, CourseInput, CourseModule, CourseSummary, ModuleInput};

/// GET /api/courses
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let courses = state
        .read_catalog("course_list", |catalog| catalog.courses.list_courses())
        .await?;
    Ok(Json(courses))
}

/// GET /api/courses/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<CourseDetail>, ApiError> {
    let course = state
        .read_catalog("course_get", move |catalog| catalog.courses.get_course(id))
        .await?;
    Ok(Json(course))
}

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CourseInput>,
) -> Result<Created, ApiError> {
    let id = state
        .with_catalog("course_create", move |catalog| {
            catalog.courses.create_course(input)
        })
        .await?;
    Ok(created("course created", id))
}

/// PUT /api/courses/:id
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<CourseInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("course_update", move |catalog| {
            catalog.courses.update_course(id, input)
        })
        .await?;
    Ok(done("course updated"))
}

/// DELETE /api/courses/:id
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("course_delete", move |catalog| {
            catalog.courses.delete_course(id)
        })
        .await?;
    Ok(done("course and all of its modules and lessons deleted"))
}

/// POST /api/courses/:id/publish
pub async fn publish(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<ActionResponse>, ApiError> {
    state
        .with_catalog("course_publish", move |catalog| {
            catalog.courses.publish_course(id)
        })
        .await?;
    Ok(done("course published"))
}

/// GET /api/courses/:id/modules
pub async fn list_modules(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Vec<CourseModule>>, ApiError> {
    let modules = state
        .read_catalog("module_list", move |catalog| {
            catalog.courses.list_modules(id)
        })
        .await?;
    Ok(Json(modules))
}

/// POST /api/courses/:id/modules
pub async fn create_module(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<ModuleInput>,
) -> Result<Created, ApiError> {
    let module_id = state
        .with_catalog("module_create", move |catalog| {
            catalog.courses.add_module(id, input)
        })
        .await?;
    Ok(created("module created", module_id))
}
