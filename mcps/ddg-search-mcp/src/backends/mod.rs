//! Search backend implementations
//!
//! This module provides a trait-based abstraction for search backends.
//! Currently supports DuckDuckGo's HTML results page (no API key needed).

use async_trait::async_trait;

use crate::error::ServerResult;
use crate::types::SearchRecord;

pub mod duckduckgo;

/// Trait for search backends
///
/// All search backends must implement this trait to provide a consistent
/// interface for the MCP server.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Perform a web search, returning at most `limit` records in rank order
    ///
    /// An empty vector is a successful search with no hits. Errors are
    /// reserved for transport failures and timeouts.
    async fn search(&self, query: &str, limit: usize) -> ServerResult<Vec<SearchRecord>>;
}
