use crate::{AppState, WebError};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use substation_core::MaintenanceFilter;

pub fn maintenance_routes() -> Router<AppState> {
    Router::new().route("/api/maintenance", get(list_maintenance))
}

async fn list_maintenance(
    State(state): State<AppState>,
    filter: Result<Query<MaintenanceFilter>, QueryRejection>,
) -> Result<Json<Value>, WebError> {
    let Query(filter) = filter?;
    let snapshot = state.store.snapshot();
    if snapshot.maintenance().is_empty() {
        return Err(WebError::Unavailable(
            "Maintenance data not available".to_string(),
        ));
    }

    let maintenance = snapshot.filter_maintenance(&filter);
    Ok(Json(json!({
        "count": maintenance.len(),
        "maintenance": serde_json::to_value(&maintenance)?,
    })))
}
