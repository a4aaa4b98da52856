//! Error types for the search server
//!
//! Every failure a handler can report is a variant here. The dispatcher is
//! the only place that turns one into a JSON-RPC error object.

use mcp_common::{
    error_object, IntoMcpError, McpError, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    METHOD_NOT_FOUND, PARSE_ERROR, SERVER_ERROR,
};
use thiserror::Error;

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while handling a JSON-RPC message
#[derive(Debug, Error)]
pub enum ServerError {
    /// The transport body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Bad envelope (wrong protocol tag, missing method)
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    /// Unknown JSON-RPC method
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// `tools/call` named a tool this server does not expose
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Missing or malformed tool arguments
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// The search engine did not answer within the request timeout
    #[error("Search timeout: DuckDuckGo took too long to respond")]
    Timeout,

    /// Non-success status or transport fault talking to the search engine
    #[error("Search failed: {0}")]
    Upstream(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// JSON-RPC error code for this variant
    pub fn code(&self) -> i32 {
        match self {
            ServerError::Parse(_) => PARSE_ERROR,
            ServerError::InvalidRequest(_) => INVALID_REQUEST,
            ServerError::MethodNotFound(_) | ServerError::UnknownTool(_) => METHOD_NOT_FOUND,
            ServerError::InvalidParams(_) => INVALID_PARAMS,
            ServerError::Timeout | ServerError::Upstream(_) => SERVER_ERROR,
            ServerError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoMcpError for ServerError {
    fn into_mcp_error(self) -> McpError {
        error_object(self.code(), self.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServerError::Timeout
        } else if let Some(status) = err.status() {
            ServerError::Upstream(format!("DuckDuckGo returned status {}", status.as_u16()))
        } else {
            ServerError::Upstream(err.to_string())
        }
    }
}
