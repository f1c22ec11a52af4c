//! The Frontier: an AI model catalog that refreshes itself by asking a
//! frontier model what the frontier looks like today.

mod config;
mod error;
mod routes;
mod state;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::from_config(&config)?;
    state.load().await;

    let app = routes::router(state, &config.data_dir);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("The Frontier → http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
