//! MCP protocol-specific types
//!
//! Model Context Protocol version 2024-11-05, tools capability only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::ToolSchema;

/// MCP protocol version reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported by `initialize`
pub const SERVER_NAME: &str = "duckduckgo-search-mcp";

/// Server version reported by `initialize` (from Cargo.toml)
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Methods understood by the dispatcher
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
    pub const PING: &str = "ping";
    pub const NOTIFICATION_INITIALIZED: &str = "notifications/initialized";
    pub const NOTIFICATION_CANCELLED: &str = "notifications/cancelled";
}

/// Initialize response result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Protocol version supported by server
    pub protocol_version: String,
    /// Server capabilities
    pub capabilities: ServerCapabilities,
    /// Server info
    pub server_info: ServerInfo,
}

/// Server capabilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Tools capability (no options; serialized as `{}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsCapability {}

/// Server info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl Default for InitializeResult {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities::default(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        }
    }
}

/// Tools list result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    pub tools: Vec<ToolSchema>,
}

/// `tools/call` parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCallParams {
    /// Tool name, kept raw so a non-string name can be reported back
    #[serde(default)]
    pub name: Option<Value>,
    /// Tool arguments; missing or null means `{}`
    #[serde(default)]
    pub arguments: Option<Value>,
}
