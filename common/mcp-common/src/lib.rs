//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides common functionality used across MCP servers that
//! speak JSON-RPC 2.0 directly:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging
//! - **JSON-RPC**: request/response envelope types
//! - **Errors**: the wire-level error object and conversion traits
//! - **Results**: [`ToolResult`] builders for `tools/call` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{JsonRpcResponse, ToolResult};
//!
//! let result = ToolResult::text("done");
//! let response = JsonRpcResponse::success(id, serde_json::to_value(result)?);
//! ```

pub mod error;
pub mod init;
pub mod jsonrpc;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{
    error_object, internal_error, invalid_params, invalid_request, method_not_found, parse_error,
    server_error, IntoMcpError, McpError, McpResult, ResultExt, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, SERVER_ERROR,
};
pub use init::init_tracing;
pub use jsonrpc::{echo_id, JsonRpcRequest, JsonRpcResponse, ResponsePayload, JSONRPC_VERSION};
pub use result::{ToolContent, ToolResult};
