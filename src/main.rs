mod api;
mod client;
mod config;
mod constants;
mod formatters;
mod gateway;
mod models;
mod service;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::NwsClient;
use crate::config::{Config, Transport};
use crate::gateway::AlertGateway;
use crate::service::Weather;

/// Serves the MCP surface on stdin/stdout until the client disconnects
async fn serve_stdio(gateway: Arc<AlertGateway>) -> Result<()> {
    tracing::info!("Starting MCP surface on stdio");

    let server = Weather::new(gateway).serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("MCP surface stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_alert_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        transport = ?config.transport,
        provider = %config.nws_api_base,
        "Starting weather alert gateway"
    );

    let client = NwsClient::new(&config.nws_api_base, config.request_timeout)?;
    let gateway = Arc::new(AlertGateway::new(client));

    match config.transport {
        Transport::Http => api::serve(config.addr, gateway, shutdown_signal()).await?,
        Transport::Stdio => serve_stdio(gateway).await?,
        Transport::Both => {
            tokio::select! {
                result = api::serve(config.addr, gateway.clone(), shutdown_signal()) => result?,
                result = serve_stdio(gateway) => result?,
            }
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}
