use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Fixed status message confirming the API is up.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Генератор поздравлений API работает!"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
