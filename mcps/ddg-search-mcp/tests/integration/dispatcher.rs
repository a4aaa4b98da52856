//! Dispatcher scenarios end to end through the DuckDuckGo backend

use serde_json::{json, Value};

use std::sync::Arc;

use super::fixture::{fixture_config, fixture_server};
use ddg_search_mcp::session::SessionRegistry;
use ddg_search_mcp::{DuckDuckGoBackend, SearchMcpServer};

async fn search(server: &SearchMcpServer, arguments: Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/call",
        "params": {"name": "search_web", "arguments": arguments}
    });
    let response = server
        .handle_str(&request.to_string())
        .await
        .expect("tools/call must be answered");
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn search_respects_max_results() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "rust", "max_results": 2})).await;

    assert_eq!(resp["id"], 7);
    assert!(resp.get("error").is_none(), "{resp}");
    let result = &resp["result"];
    assert_eq!(
        result["_meta"],
        json!({"query": "rust", "resultsCount": 2, "maxResults": 2, "source": "DuckDuckGo"})
    );

    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("# Search Results for \"rust\"\n\nFound 2 result(s):"));
    assert!(text.contains("## 1. The Rust Programming Language"));
    assert!(text.contains("**URL:** https://example.com/page/1"));
    assert!(text.contains("Learn Rust & more"));
    assert!(text.contains("## 2. Rust by Example"));
    assert!(!text.contains("crates.io"));
}

#[tokio::test]
async fn search_defaults_to_five_and_returns_what_exists() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "rust"})).await;
    assert_eq!(resp["result"]["_meta"]["resultsCount"], 3);
    assert_eq!(resp["result"]["_meta"]["maxResults"], 5);
}

#[tokio::test]
async fn search_without_hits_is_not_an_error() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "nothing"})).await;

    assert!(resp.get("error").is_none());
    assert_eq!(
        resp["result"]["content"][0]["text"],
        "No results found for \"nothing\". Try a different search query."
    );
    assert!(resp["result"].get("_meta").is_none());
}

#[tokio::test]
async fn upstream_failure_is_a_server_error() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "broken"})).await;

    assert_eq!(resp["id"], 7);
    assert_eq!(resp["error"]["code"], -32000);
    assert_eq!(
        resp["error"]["message"],
        "Search failed: DuckDuckGo returned status 503"
    );
    assert!(resp.get("result").is_none());
}

#[tokio::test]
async fn unreachable_upstream_is_a_server_error() {
    // Bind then release a port so nothing is listening on it.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let backend = DuckDuckGoBackend::new(fixture_config(addr)).unwrap();
    let server = SearchMcpServer::new(Arc::new(backend), SessionRegistry::new());

    let resp = search(&server, json!({"query": "rust"})).await;

    assert_eq!(resp["id"], 7);
    assert_eq!(resp["error"]["code"], -32000);
    let message = resp["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Search failed: "), "{message}");
    assert!(message.len() > "Search failed: ".len());
    assert!(resp.get("result").is_none());
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "slow"})).await;

    assert_eq!(resp["error"]["code"], -32000);
    assert_eq!(
        resp["error"]["message"],
        "Search timeout: DuckDuckGo took too long to respond"
    );
}

#[tokio::test]
async fn browser_headers_are_sent() {
    let server = fixture_server().await;
    let resp = search(&server, json!({"query": "echo-headers"})).await;

    let text = resp["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("## 1. Mozilla/5.0"), "{text}");
    assert!(text.contains("en-US,en;q=0.9"), "{text}");
}

#[tokio::test]
async fn full_session_handshake() {
    let server = fixture_server().await;

    let init = server
        .handle_str(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#)
        .await
        .unwrap();
    assert_eq!(init.result().unwrap()["protocolVersion"], "2024-11-05");

    let ack = server
        .handle_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(ack.is_none());

    let list = server
        .handle_str(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    assert_eq!(list.result().unwrap()["tools"][0]["name"], "search_web");

    assert_eq!(server.sessions().size().await, 1);
}
