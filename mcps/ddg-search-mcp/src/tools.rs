//! The `search_web` tool
//!
//! Validates tool arguments, runs the backend search and renders the
//! records. The descriptor returned by `tools/list` is generated from
//! [`SearchWebParams`].

use mcp_common::ToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backends::SearchBackend;
use crate::error::{ServerError, ServerResult};
use crate::format::format_results;
use crate::types::SearchWebParams;

/// Name of the only tool this server exposes
pub const SEARCH_TOOL_NAME: &str = "search_web";

const SEARCH_TOOL_DESCRIPTION: &str = "Search the web using DuckDuckGo. Returns titles, URLs, \
     and snippets from search results. Great for finding information, articles, news, and \
     general web content.";

/// Static tool descriptor as listed by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Descriptor of the `search_web` tool
pub fn search_web_schema() -> ServerResult<ToolSchema> {
    let mut input_schema = serde_json::to_value(schemars::schema_for!(SearchWebParams))?;
    if let Value::Object(map) = &mut input_schema {
        map.remove("$schema");
        map.remove("title");
    }

    Ok(ToolSchema {
        name: SEARCH_TOOL_NAME.to_string(),
        description: SEARCH_TOOL_DESCRIPTION.to_string(),
        input_schema,
    })
}

/// Run `search_web` with raw `tools/call` arguments
pub async fn search_web(backend: &dyn SearchBackend, arguments: Value) -> ServerResult<ToolResult> {
    let params = parse_params(arguments)?;

    let query = params.query.trim();
    if query.is_empty() {
        return Err(ServerError::InvalidParams("query is required".to_string()));
    }
    let max_results = params.effective_max_results();

    tracing::info!(
        "Searching {} for: {:?} (max: {})",
        backend.name(),
        query,
        max_results
    );

    let records = backend.search(query, max_results).await?;
    format_results(&records, query, max_results)
}

fn parse_params(mut arguments: Value) -> ServerResult<SearchWebParams> {
    if arguments.get("query").map_or(true, Value::is_null) {
        return Err(ServerError::InvalidParams("query is required".to_string()));
    }
    if let Value::Object(map) = &mut arguments {
        if map.get("max_results").is_some_and(Value::is_null) {
            map.remove("max_results");
        }
    }

    serde_json::from_value(arguments).map_err(|e| ServerError::InvalidParams(e.to_string()))
}
