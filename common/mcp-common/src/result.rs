//! Result helpers for MCP tool responses
//!
//! `ToolResult` is the payload of a successful `tools/call`: a list of
//! content blocks plus optional `_meta` describing how it was produced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content block returned by a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Result of a `tools/call`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ToolResult {
    /// Create a successful plain text result
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use mcp_common::ToolResult;
    ///
    /// let result = ToolResult::text("Operation completed successfully");
    /// ```
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            meta: None,
        }
    }

    /// Attach serializable metadata as `_meta`
    pub fn with_meta<T: Serialize>(mut self, meta: &T) -> Result<Self, serde_json::Error> {
        self.meta = Some(serde_json::to_value(meta)?);
        Ok(self)
    }

    /// Text of the first text block, if any
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|c| match c {
            ToolContent::Text { text } => Some(text.as_str()),
        })
    }
}
