//! Live smoke test against html.duckduckgo.com

use serde_json::json;

use ddg_search_mcp::Config;
use ddg_search_mcp::SearchMcpServer;

#[tokio::test]
#[ignore = "integration test - requires network access to DuckDuckGo"]
async fn live_search_returns_results() {
    let server = SearchMcpServer::from_config(&Config::default()).unwrap();
    let request = json!({
        "jsonrpc": "2.0", "id": 1, "method": "tools/call",
        "params": {"name": "search_web", "arguments": {"query": "rust programming language", "max_results": 3}}
    });

    let response = server.handle_str(&request.to_string()).await.unwrap();
    let value = serde_json::to_value(response).unwrap();
    assert!(value.get("error").is_none(), "search failed: {value}");

    let count = value["result"]["_meta"]["resultsCount"].as_u64().unwrap_or(0);
    assert!((1..=3).contains(&count), "unexpected result count: {value}");
}
