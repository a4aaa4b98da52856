//! DuckDuckGo Search MCP Library
//!
//! Web search over the Model Context Protocol, backed by DuckDuckGo's
//! HTML results page. No API key is required.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use ddg_search_mcp::{Config, SearchMcpServer};
//!
//! let server = SearchMcpServer::from_config(&Config::load(None)?)?;
//! let response = server.handle_str(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#).await;
//! ```
//!
//! # Configuration
//! See [`config`]; `~/.binks/ddg-search.toml` by default.

pub mod backends;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod protocol;
pub mod sanitize;
pub mod server;
pub mod session;
pub mod tools;
pub mod transport;
pub mod types;

// Re-export main server type
pub use server::SearchMcpServer;

pub use backends::{duckduckgo::DuckDuckGoBackend, SearchBackend};
pub use config::Config;
pub use error::{ServerError, ServerResult};
pub use session::SessionRegistry;
pub use transport::TransportKind;
pub use types::{SearchRecord, SearchWebParams};
