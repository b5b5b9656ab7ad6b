use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use server_api::ApiContext;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    if settings.database_url.is_some() {
        info!("database url configured; form submissions are logged only");
    }
    if let Some(dir) = &settings.static_dir {
        if !dir.join("index.html").is_file() {
            warn!(static_dir = %dir.display(), "static directory has no index.html");
        }
    }

    let state = AppState {
        api: ApiContext::default(),
    };
    let app = api::build_router(Arc::new(state), settings.static_dir.as_deref());

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address {:?}", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
