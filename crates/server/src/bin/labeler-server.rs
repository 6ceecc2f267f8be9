//! Labeler service binary.
//!
//! Standalone HTTP service that keeps pull request labels in sync
//! with each repository's rule file.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use labeler::Reconciler;
use labeler_server::{build_router, AppState, Config};
use scm::GitHubClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("labeler=info".parse()?))
        .init();

    info!("Starting labeler service...");

    let config = Config::default();

    let token = config
        .github_token
        .clone()
        .context("GITHUB_TOKEN must be set")?;
    if config.webhook_secret.is_none() {
        info!("No GITHUB_WEBHOOK_SECRET configured - signature verification disabled");
    }

    let gateway = GitHubClient::new(&token)
        .context("Failed to create GitHub client")?
        .with_config_path(&config.config_path);
    let reconciler = Arc::new(Reconciler::new(Arc::new(gateway)));

    let state = AppState {
        config: config.clone(),
        reconciler,
    };
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(port = config.port, "Labeler service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
