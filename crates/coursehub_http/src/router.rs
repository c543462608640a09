//! Router construction for the CourseHub server.

use crate::error::ApiError;
use crate::handlers::{courses, health, instructors, lessons, modules};
use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self as axum_mw, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::time::Instant;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/instructors",
            get(instructors::list).post(instructors::create),
        )
        .route(
            "/api/instructors/:id",
            get(instructors::get)
                .put(instructors::update)
                .delete(instructors::delete),
        )
        .route("/api/courses", get(courses::list).post(courses::create))
        .route(
            "/api/courses/:id",
            get(courses::get).put(courses::update).delete(courses::delete),
        )
        .route("/api/courses/:id/publish", post(courses::publish))
        .route(
            "/api/courses/:id/modules",
            get(courses::list_modules).post(courses::create_module),
        )
        .route(
            "/api/modules/:id",
            get(modules::get).put(modules::update).delete(modules::delete),
        )
        .route(
            "/api/modules/:id/lessons",
            get(modules::list_lessons).post(modules::create_lesson),
        )
        .route(
            "/api/lessons/:id",
            get(lessons::get).put(lessons::update).delete(lessons::delete),
        )
        .fallback(unknown_route)
        .layer(axum_mw::from_fn(log_request))
        .with_state(state)
}

async fn unknown_route(request: Request) -> ApiError {
    ApiError::not_found(format!("route not found: {}", request.uri().path()))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "event=http_request module=http status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started.elapsed().as_millis()
    );
    response
}
