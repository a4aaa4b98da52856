//! Common types for web search results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest accepted `max_results`
pub const MIN_RESULTS: i64 = 1;
/// Largest accepted `max_results`
pub const MAX_RESULTS: i64 = 10;
/// `max_results` when the caller omits it
pub const DEFAULT_MAX_RESULTS: i64 = 5;

/// A single web search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// The title of the result (never empty)
    pub title: String,
    /// The target URL of the result (never empty)
    pub url: String,
    /// A snippet of the result; may be empty
    pub snippet: String,
}

/// Arguments of the `search_web` tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchWebParams {
    /// The search query to look up on DuckDuckGo
    pub query: String,
    /// Maximum number of results to return (default: 5, max: 10)
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 10))]
    pub max_results: i64,
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

impl SearchWebParams {
    /// `max_results` clamped into the accepted range
    pub fn effective_max_results(&self) -> usize {
        self.max_results.clamp(MIN_RESULTS, MAX_RESULTS) as usize
    }
}

/// `_meta` attached to a non-empty search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeta {
    pub query: String,
    pub results_count: usize,
    pub max_results: usize,
    pub source: String,
}
