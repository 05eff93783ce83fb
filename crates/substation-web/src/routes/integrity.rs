use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn integrity_routes() -> Router<AppState> {
    Router::new().route("/api/integrity", get(integrity_report))
}

/// Advisory issues; always answers 200
async fn integrity_report(State(state): State<AppState>) -> Json<Value> {
    let issues = state.store.snapshot().validate();
    let status = if issues.is_empty() {
        "healthy"
    } else {
        "issues_detected"
    };

    Json(json!({
        "status": status,
        "issue_count": issues.len(),
        "issues": issues,
    }))
}
