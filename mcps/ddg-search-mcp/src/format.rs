//! Rendering of search records as a tool result

use mcp_common::ToolResult;

use crate::error::ServerResult;
use crate::types::{SearchMeta, SearchRecord};

/// Provider tag reported in `_meta.source`
pub const SOURCE: &str = "DuckDuckGo";

/// Render records as one markdown text block
///
/// Zero records is not an error: the text says nothing was found and no
/// `_meta` is attached.
pub fn format_results(
    records: &[SearchRecord],
    query: &str,
    max_results: usize,
) -> ServerResult<ToolResult> {
    if records.is_empty() {
        return Ok(ToolResult::text(format!(
            "No results found for \"{}\". Try a different search query.",
            query
        )));
    }

    let mut markdown = format!(
        "# Search Results for \"{}\"\n\nFound {} result(s):\n\n",
        query,
        records.len()
    );

    for (index, record) in records.iter().enumerate() {
        markdown.push_str(&format!(
            "## {}. {}\n\n**URL:** {}\n\n",
            index + 1,
            record.title,
            record.url
        ));
        if !record.snippet.is_empty() {
            markdown.push_str(&record.snippet);
            markdown.push_str("\n\n");
        }
        markdown.push_str("---\n\n");
    }

    let meta = SearchMeta {
        query: query.to_string(),
        results_count: records.len(),
        max_results,
        source: SOURCE.to_string(),
    };

    Ok(ToolResult::text(markdown).with_meta(&meta)?)
}
