use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe; carries no version or dependency detail.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}
