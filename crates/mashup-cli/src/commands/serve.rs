//! Serve command implementation.
//!
//! Runs the REST API from `mashup-api` over the configured store.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use mashup_api::{create_api_router, create_api_state};
use mashup_ops::{Config, OpsContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serve the API until interrupted.
pub async fn execute(config: Config, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let ctx = OpsContext::open(config).await?;

    let status = ctx.status().await?;
    let empty = status.empty_pools();
    if !empty.is_empty() {
        warn!(?empty, "Some element pools are empty; generation may fail");
    }
    if ctx.config.api_tokens.is_empty() {
        warn!("No API tokens configured; saved idea endpoints will reject every request");
    }

    let app = create_api_router(create_api_state(ctx));

    println!("🚀 Idea Mashup API listening on http://{}", addr);
    info!(%addr, "Starting server");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
