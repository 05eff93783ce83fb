use crate::routes::{
    entity_routes, equipment_routes, health_routes, integrity_routes, maintenance_routes,
    search_routes, status_routes,
};
use crate::{AppState, Result};
use axum::http::Method;
use axum::Router;
use std::sync::Arc;
use substation_config::ServerConfig;
use substation_core::RecordStore;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assemble every route over `state`
///
/// | Route | Purpose |
/// |---|---|
/// | `GET /` | banner and data summary |
/// | `GET /api/equipment` | equipment filtered by `equipment_type`, `status` |
/// | `GET /api/maintenance` | maintenance filtered by `equipment_id`, `status` |
/// | `GET /api/entities` | distinct field values with counts |
/// | `GET /api/search?query=` | substring search across both collections |
/// | `GET /api/equipment/{equipment_id}/relationships` | equipment with its history |
/// | `GET /api/integrity` | orphaned references and empty collections |
/// | `GET /health` | liveness |
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new()
        .merge(status_routes())
        .merge(equipment_routes())
        .merge(maintenance_routes())
        .merge(entity_routes())
        .merge(search_routes())
        .merge(integrity_routes())
        .with_state(state)
        .merge(health_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Bind `config.host:config.port` and serve until Ctrl-C
pub async fn start_server(config: &ServerConfig, store: Arc<RecordStore>) -> Result<()> {
    let app = build_router(AppState::new(store), config.enable_cors);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting web server on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
