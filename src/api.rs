//! HTTP surface of the gateway.
//!
//! Each endpoint takes a one-field JSON body and answers `{"result": "..."}`
//! with exactly the string the MCP surface would return.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::gateway::AlertGateway;
use crate::models::{EchoRequest, GetAlertsRequest, ToolResponse};

/// Build the router with all routes.
pub fn router(gateway: Arc<AlertGateway>) -> Router {
    Router::new()
        .route("/get_alerts", post(get_alerts))
        .route("/echo", post(echo))
        .with_state(gateway)
}

async fn get_alerts(
    State(gateway): State<Arc<AlertGateway>>,
    Json(request): Json<GetAlertsRequest>,
) -> Json<ToolResponse> {
    tracing::info!("HTTP get_alerts for state: {}", request.state);

    Json(ToolResponse {
        result: gateway.get_alerts(&request.state).await,
    })
}

async fn echo(
    State(gateway): State<Arc<AlertGateway>>,
    Json(request): Json<EchoRequest>,
) -> Json<ToolResponse> {
    Json(ToolResponse {
        result: gateway.echo(&request.message),
    })
}

/// Serve the HTTP surface on `addr` until `shutdown` resolves
pub async fn serve(
    addr: SocketAddr,
    gateway: Arc<AlertGateway>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "HTTP surface listening");

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP surface stopped");
    Ok(())
}
