use crate::{AppState, WebError};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_records))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

// A missing `query` parameter is treated like a blank one.
async fn search_records(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, WebError> {
    let Query(params) = params?;
    let query = params.query.unwrap_or_default();

    let snapshot = state.store.snapshot();
    let results = snapshot.search(&query)?;
    debug!(%query, total = results.total(), "search");

    Ok(Json(json!({
        "query": query,
        "total_results": results.total(),
        "results": serde_json::to_value(&results)?,
    })))
}
