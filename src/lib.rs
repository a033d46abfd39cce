pub mod api;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod progression;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

pub use config::Config;
use state::SharedState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Stagelight v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let serve_http = config.server.enabled;

    let shared = Arc::new(SharedState::new(config).await?);
    let app_state = api::create_app_state(shared);
    let app = api::router(app_state).await;

    if !serve_http {
        info!("HTTP server disabled in config, nothing to do");
        return Ok(());
    }

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("API server running at http://0.0.0.0:{}", port);
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    server_handle.abort();
    info!("Server stopped");

    Ok(())
}
