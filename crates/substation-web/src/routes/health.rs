//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "substation-web"
    }))
}
