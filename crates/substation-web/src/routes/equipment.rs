use crate::{AppState, WebError};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use substation_core::EquipmentFilter;

pub fn equipment_routes() -> Router<AppState> {
    Router::new()
        .route("/api/equipment", get(list_equipment))
        .route(
            "/api/equipment/{equipment_id}/relationships",
            get(equipment_relationships),
        )
}

async fn list_equipment(
    State(state): State<AppState>,
    filter: Result<Query<EquipmentFilter>, QueryRejection>,
) -> Result<Json<Value>, WebError> {
    let Query(filter) = filter?;
    let snapshot = state.store.snapshot();
    if snapshot.equipment().is_empty() {
        return Err(WebError::Unavailable(
            "Equipment data not available".to_string(),
        ));
    }

    let equipment = snapshot.filter_equipment(&filter);
    Ok(Json(json!({
        "count": equipment.len(),
        "equipment": serde_json::to_value(&equipment)?,
    })))
}

async fn equipment_relationships(
    State(state): State<AppState>,
    Path(equipment_id): Path<String>,
) -> Result<Json<Value>, WebError> {
    let snapshot = state.store.snapshot();
    let relationship = snapshot
        .relationships(&equipment_id)
        .ok_or_else(|| WebError::NotFound(format!("Equipment {equipment_id} not found")))?;

    Ok(Json(serde_json::to_value(&relationship)?))
}
