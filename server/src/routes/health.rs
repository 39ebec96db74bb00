use axum::Json;
use serde_json::{json, Value};

/// GET /
///
/// Returns a simple status check so the mobile app can probe the server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "IMC suggestions server running",
        "version": "1.0.0"
    }))
}
