use anyhow::{Context, Result};
use std::sync::Arc;
use substation_config::SubstationConfig;
use tracing::{info, warn};

use super::load_store;

pub async fn execute(
    config: SubstationConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let (store, report) = load_store(&config);
    if report.all_loaded() {
        let issues = store.snapshot().validate();
        if issues.is_empty() {
            info!("Data integrity check passed");
        }
        for issue in issues {
            warn!("Data integrity issue: {issue}");
        }
    }

    substation_web::start_server(&server, Arc::new(store))
        .await
        .with_context(|| format!("HTTP server on {}:{} failed", server.host, server.port))
}
