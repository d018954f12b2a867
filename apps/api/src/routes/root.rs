use axum::Json;
use serde_json::{json, Value};

/// GET /api/
/// Returns a greeting with the service version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Portfolio API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
