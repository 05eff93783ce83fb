use crate::{AppState, WebError};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn entity_routes() -> Router<AppState> {
    Router::new().route("/api/entities", get(get_entities))
}

async fn get_entities(State(state): State<AppState>) -> Result<Json<Value>, WebError> {
    let snapshot = state.store.snapshot();
    if snapshot.is_empty() {
        return Err(WebError::Unavailable("No data available".to_string()));
    }

    let entities = snapshot.entities();
    Ok(Json(json!({
        "summary": serde_json::to_value(entities.summary())?,
        "entities": serde_json::to_value(entities)?,
    })))
}
