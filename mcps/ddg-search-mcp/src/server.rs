//! JSON-RPC dispatcher for the search server
//!
//! Validates envelopes, separates notifications from requests, routes by
//! method name and turns every `ServerError` into a JSON-RPC error object.
//! Transports hand it parsed messages and write back whatever it returns;
//! `None` means nothing is sent.

use anyhow::Result;
use mcp_common::{echo_id, IntoMcpError, JsonRpcRequest, JsonRpcResponse, ResultExt};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::backends::{duckduckgo::DuckDuckGoBackend, SearchBackend};
use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::protocol::{methods, InitializeResult, ToolCallParams, ToolsListResult};
use crate::session::SessionRegistry;
use crate::tools::{search_web, search_web_schema, SEARCH_TOOL_NAME};

/// The DuckDuckGo search MCP server
#[derive(Clone)]
pub struct SearchMcpServer {
    backend: Arc<dyn SearchBackend>,
    sessions: SessionRegistry,
}

impl SearchMcpServer {
    pub fn new(backend: Arc<dyn SearchBackend>, sessions: SessionRegistry) -> Self {
        Self { backend, sessions }
    }

    /// Build a server backed by DuckDuckGo as configured
    pub fn from_config(config: &Config) -> Result<Self> {
        tracing::info!("Using DuckDuckGo backend at {}", config.search.endpoint);
        let backend: Arc<dyn SearchBackend> =
            Arc::new(DuckDuckGoBackend::new(config.search.clone())?);
        Ok(Self::new(backend, SessionRegistry::new()))
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Handle a raw message body
    ///
    /// Invalid JSON is answered with a parse error carrying a `null` id.
    pub async fn handle_str(&self, body: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(body) {
            Ok(message) => self.handle_value(message).await,
            Err(e) => {
                tracing::warn!("Failed to parse JSON-RPC message: {}", e);
                Some(error_response(Value::Null, ServerError::Parse(e.to_string())))
            }
        }
    }

    /// Handle a parsed JSON value that should be a request envelope
    pub async fn handle_value(&self, message: Value) -> Option<JsonRpcResponse> {
        let id = echo_id(message.get("id"));
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                tracing::warn!("Malformed JSON-RPC envelope: {}", e);
                Some(error_response(id, ServerError::InvalidRequest(e.to_string())))
            }
        }
    }

    /// Handle a request or notification
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if !request.has_valid_version() {
            tracing::warn!("Rejecting message with jsonrpc={:?}", request.jsonrpc);
            return Some(error_response(
                request.response_id(),
                ServerError::InvalidRequest("jsonrpc must be 2.0".to_string()),
            ));
        }

        if !request.has_valid_id() {
            tracing::warn!("Rejecting message with id={:?}", request.id);
            return Some(error_response(
                Value::Null,
                ServerError::InvalidRequest("id must be a string or number".to_string()),
            ));
        }

        if request.is_notification() {
            self.handle_notification(request.method.as_deref());
            return None;
        }

        let JsonRpcRequest {
            id, method, params, ..
        } = request;
        let id = id.unwrap_or(Value::Null);

        let Some(method) = method else {
            return Some(error_response(
                id,
                ServerError::InvalidRequest("method is required".to_string()),
            ));
        };

        match self.dispatch(&method, params).await.to_mcp_err() {
            Ok(result) => Some(JsonRpcResponse::success(id, result)),
            Err(error) => {
                tracing::warn!(code = error.code.0, "{} failed: {}", method, error.message);
                Some(JsonRpcResponse::error(id, error))
            }
        }
    }

    fn handle_notification(&self, method: Option<&str>) {
        match method {
            Some(methods::NOTIFICATION_INITIALIZED) => {
                tracing::info!("Client initialized successfully");
            }
            Some(methods::NOTIFICATION_CANCELLED) => {
                // In-flight searches are not interrupted.
                tracing::info!("Request cancelled by client");
            }
            other => tracing::debug!("Notification received: {:?}", other),
        }
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> ServerResult<Value> {
        tracing::debug!("Dispatching {}", method);

        match method {
            methods::INITIALIZE => Ok(serde_json::to_value(self.handle_initialize().await)?),
            methods::TOOLS_LIST => Ok(serde_json::to_value(self.handle_tools_list()?)?),
            methods::TOOLS_CALL => {
                let params: ToolCallParams = match params {
                    Some(params @ Value::Object(_)) => serde_json::from_value(params)
                        .map_err(|e| ServerError::InvalidParams(e.to_string()))?,
                    _ => ToolCallParams::default(),
                };
                let result = self.handle_tools_call(params).await?;
                Ok(serde_json::to_value(result)?)
            }
            methods::PING => Ok(json!({})),
            other => Err(ServerError::MethodNotFound(other.to_string())),
        }
    }

    /// Handle `initialize`: record a session and describe the server
    pub async fn handle_initialize(&self) -> InitializeResult {
        let session_id = self.sessions.create().await;
        tracing::info!("Session {} initialized", session_id);
        InitializeResult::default()
    }

    /// Handle `tools/list`
    pub fn handle_tools_list(&self) -> ServerResult<ToolsListResult> {
        Ok(ToolsListResult {
            tools: vec![search_web_schema()?],
        })
    }

    /// Handle `tools/call`
    pub async fn handle_tools_call(
        &self,
        params: ToolCallParams,
    ) -> ServerResult<mcp_common::ToolResult> {
        match params.name {
            Some(Value::String(name)) if name == SEARCH_TOOL_NAME => {}
            Some(Value::String(name)) => return Err(ServerError::UnknownTool(name)),
            other => {
                return Err(ServerError::UnknownTool(
                    other.unwrap_or(Value::Null).to_string(),
                ))
            }
        }

        let arguments = match params.arguments {
            Some(Value::Null) | None => json!({}),
            Some(arguments) => arguments,
        };
        search_web(self.backend.as_ref(), arguments).await
    }
}

fn error_response(id: Value, error: ServerError) -> JsonRpcResponse {
    JsonRpcResponse::error(id, error.into_mcp_error())
}
