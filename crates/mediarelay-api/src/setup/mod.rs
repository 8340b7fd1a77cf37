//! Turns a [`Config`] into a ready-to-serve application.
//!
//! Initialization lives here instead of main.rs so tests can build the
//! router without binding a socket.

pub mod routes;
pub mod server;

use crate::probe::MediaProbe;
use crate::state::AppState;
use anyhow::{Context, Result};
use mediarelay_core::Config;
use mediarelay_storage::create_storage;
use std::sync::Arc;

/// Initialize telemetry, storage, and the router from `config`.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!(
        backend = %config.storage_backend,
        port = config.server_port,
        "Configuration loaded"
    );

    let storage = create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;

    let probe = MediaProbe::new(config.ffprobe_path.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        probe,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
