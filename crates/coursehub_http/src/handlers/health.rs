use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": coursehub_core::ping(),
        "version": coursehub_core::core_version(),
    }))
}
