//! JSON-RPC 2.0 envelope types
//!
//! See: https://www.jsonrpc.org/specification
//!
//! Requests are kept deliberately loose (every member optional) so that a
//! server can inspect a malformed envelope and still echo its `id` back in
//! an error response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::McpError;

/// The only protocol tag accepted in the `jsonrpc` member
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request or notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol tag (must be "2.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    /// Request ID (string or number); absent or null for notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Method name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Method parameters (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a new request with an id
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(id.into()),
            method: Some(method.into()),
            params,
        }
    }

    /// Create a new notification (no id, never answered)
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: None,
            method: Some(method.into()),
            params,
        }
    }

    /// Whether the protocol tag is exactly "2.0"
    pub fn has_valid_version(&self) -> bool {
        self.jsonrpc.as_deref() == Some(JSONRPC_VERSION)
    }

    /// Whether the id is absent, a string or a number
    pub fn has_valid_id(&self) -> bool {
        self.id.as_ref().map_or(true, is_valid_id)
    }

    /// A message without an id is a notification
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// The id to echo in a response (`null` when absent or malformed)
    pub fn response_id(&self) -> Value {
        echo_id(self.id.as_ref())
    }
}

/// Request ids are strings or numbers
pub fn is_valid_id(id: &Value) -> bool {
    matches!(id, Value::String(_) | Value::Number(_))
}

/// The id to echo for a raw id member: itself if valid, else `null`
pub fn echo_id(id: Option<&Value>) -> Value {
    match id {
        Some(id) if is_valid_id(id) => id.clone(),
        _ => Value::Null,
    }
}

/// Outcome carried by a response: exactly one of `result` or `error`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsePayload {
    Result(Value),
    Error(McpError),
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol tag (always "2.0")
    pub jsonrpc: String,
    /// Request ID (echoed verbatim, or null if it could not be determined)
    pub id: Value,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            payload: ResponsePayload::Result(result),
        }
    }

    /// Create a new error response
    pub fn error(id: Value, error: McpError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            payload: ResponsePayload::Error(error),
        }
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.payload {
            ResponsePayload::Result(value) => Some(value),
            ResponsePayload::Error(_) => None,
        }
    }

    pub fn error_object(&self) -> Option<&McpError> {
        match &self.payload {
            ResponsePayload::Result(_) => None,
            ResponsePayload::Error(err) => Some(err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.payload, ResponsePayload::Error(_))
    }
}
