//! HTTP transport
//!
//! Every JSON-RPC outcome, including errors, is returned with `200 OK`.
//! Notifications are acknowledged with `204 No Content`.

use anyhow::Result;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::protocol::{PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::server::SearchMcpServer;

pub const MCP_PATH: &str = "/mcp";
pub const HEALTH_PATH: &str = "/health";

/// Body of `GET /`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub transport: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub protocol_version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub mcp: &'static str,
    pub health: &'static str,
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub sessions: usize,
}

/// Build the router serving the dispatcher
pub fn router(server: SearchMcpServer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(describe))
        .route(HEALTH_PATH, get(health_check))
        .route(MCP_PATH, post(handle_mcp))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(server: SearchMcpServer, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP endpoint: http://{}{}", listener.local_addr()?, MCP_PATH);
    tracing::info!("Health check: http://{}{}", listener.local_addr()?, HEALTH_PATH);

    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn handle_mcp(State(server): State<SearchMcpServer>, body: String) -> Response {
    match server.handle_str(&body).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn describe() -> Json<ServerDescriptor> {
    Json(ServerDescriptor {
        name: SERVER_NAME,
        version: SERVER_VERSION,
        transport: "http",
        status: "running",
        description: "DuckDuckGo web search over the Model Context Protocol",
        protocol_version: PROTOCOL_VERSION,
        endpoints: Endpoints {
            mcp: MCP_PATH,
            health: HEALTH_PATH,
        },
    })
}

async fn health_check(State(server): State<SearchMcpServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        sessions: server.sessions().size().await,
    })
}
