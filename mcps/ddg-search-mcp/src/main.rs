//! DuckDuckGo Search MCP Server
//!
//! Serves the `search_web` tool over HTTP (`POST /mcp`) or stdio.
//!
//! # Configuration
//! `~/.binks/ddg-search.toml`, `DDG_SEARCH_CONFIG_PATH` or `--config`;
//! `HOST`, `PORT` and `DDG_SEARCH_ENDPOINT` override the file.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use ddg_search_mcp::protocol::PROTOCOL_VERSION;
use ddg_search_mcp::transport::{http, stdio};
use ddg_search_mcp::{Config, SearchMcpServer, TransportKind};

#[derive(Parser)]
#[command(name = "ddg-search-mcp")]
#[command(about = "Web search MCP server backed by DuckDuckGo")]
#[command(version)]
struct Args {
    /// Transport to serve on
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value_t = TransportKind::Http)]
    transport: TransportKind,

    /// Address to bind (HTTP transport)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (HTTP transport)
    #[arg(long, short)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    mcp_common::init_tracing("ddg_search_mcp")?;

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting DuckDuckGo Search MCP Server");
    tracing::info!("Transport: {}", args.transport);
    tracing::info!("Search endpoint: {}", config.search.endpoint);
    tracing::info!("Protocol version: {}", PROTOCOL_VERSION);

    let server = SearchMcpServer::from_config(&config)?;

    match args.transport {
        TransportKind::Http => {
            let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
                .parse()
                .with_context(|| {
                    format!(
                        "invalid listen address {}:{}",
                        config.server.host, config.server.port
                    )
                })?;
            http::serve(server, addr).await
        }
        TransportKind::Stdio => stdio::serve(server).await,
    }
}
