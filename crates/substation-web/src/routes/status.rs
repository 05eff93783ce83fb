//! Service banner with a data summary

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

const API_NAME: &str = "Utility Infrastructure Knowledge Extraction API";

const ENDPOINTS: [&str; 7] = [
    "GET /api/equipment - List equipment with filters",
    "GET /api/maintenance - List maintenance with filters",
    "GET /api/entities - Extract key entities",
    "GET /api/search - Search across all data",
    "GET /api/equipment/{equipment_id}/relationships - Equipment with maintenance history",
    "GET /api/integrity - Cross-collection integrity issues",
    "GET /health - Liveness probe",
];

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    let summary = state.store.summary();

    Json(json!({
        "api": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": summary.status(),
        "data_summary": summary,
        "endpoints": ENDPOINTS,
    }))
}
