//! Error handling utilities for MCP servers
//!
//! Provides the wire-level error object, the standard JSON-RPC error codes,
//! and traits for converting server errors into that object.

use rmcp::model::ErrorCode;
pub use rmcp::ErrorData as McpError;

/// Type alias for MCP handler results
pub type McpResult<T> = Result<T, McpError>;

/// Invalid JSON was received by the server
pub const PARSE_ERROR: i32 = -32700;
/// The JSON sent is not a valid request object
pub const INVALID_REQUEST: i32 = -32600;
/// The method (or tool) does not exist
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error
pub const INTERNAL_ERROR: i32 = -32603;
/// Application-defined server error (upstream failures, timeouts)
pub const SERVER_ERROR: i32 = -32000;

/// Trait for converting errors into MCP-compatible errors
///
/// Server error enums implement this so the dispatcher is the only place
/// that turns a typed failure into a wire-level error object.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::{error_object, IntoMcpError, McpError, INTERNAL_ERROR};
///
/// impl IntoMcpError for MyError {
///     fn into_mcp_error(self) -> McpError {
///         error_object(INTERNAL_ERROR, self.to_string())
///     }
/// }
/// ```
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for McpError {
    fn into_mcp_error(self) -> McpError {
        self
    }
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(format!("JSON error: {}", self))
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(self.to_string())
    }
}

/// Extension trait for Result types to convert to MCP errors
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::ResultExt;
///
/// let value = handler.call(params).await.to_mcp_err()?;
/// ```
pub trait ResultExt<T> {
    /// Convert the error to an MCP error
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Build an error object with an explicit code
pub fn error_object(code: i32, message: impl Into<String>) -> McpError {
    McpError::new(ErrorCode(code), message.into(), None)
}

/// Create a parse error (-32700)
pub fn parse_error(message: impl Into<String>) -> McpError {
    error_object(PARSE_ERROR, message)
}

/// Create an invalid request error (-32600)
pub fn invalid_request(message: impl Into<String>) -> McpError {
    error_object(INVALID_REQUEST, message)
}

/// Create a method not found error (-32601)
pub fn method_not_found(message: impl Into<String>) -> McpError {
    error_object(METHOD_NOT_FOUND, message)
}

/// Create an invalid params error (-32602)
///
/// Use this when a tool receives missing or malformed arguments.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    error_object(INVALID_PARAMS, message)
}

/// Create an internal error (-32603)
pub fn internal_error(message: impl Into<String>) -> McpError {
    error_object(INTERNAL_ERROR, message)
}

/// Create an application-level server error (-32000)
pub fn server_error(message: impl Into<String>) -> McpError {
    error_object(SERVER_ERROR, message)
}
