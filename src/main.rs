#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wallet-web failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.wallet_api_url, body_limit = config.body_limit_bytes, "configuration loaded");

    let state = state::AppState::new(config)?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "wallet-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
