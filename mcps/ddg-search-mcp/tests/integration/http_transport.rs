//! HTTP transport contract

use serde_json::{json, Value};
use std::net::SocketAddr;

use super::fixture::fixture_server;
use ddg_search_mcp::transport::http::router;

async fn spawn_http() -> SocketAddr {
    let app = router(fixture_server().await);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post(addr: SocketAddr, body: impl Into<reqwest::Body>) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}/mcp"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn requests_are_answered_with_200() {
    let addr = spawn_http().await;
    let resp = post(
        addr,
        json!({"jsonrpc": "2.0", "id": "abc", "method": "ping"}).to_string(),
    )
    .await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"jsonrpc": "2.0", "id": "abc", "result": {}}));
}

#[tokio::test]
async fn errors_are_still_200() {
    let addr = spawn_http().await;

    let resp = post(addr, json!({"jsonrpc": "2.0", "id": 1, "method": "nope"}).to_string()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], -32601);

    let resp = post(addr, json!({"jsonrpc": "1.0", "id": 2, "method": "ping"}).to_string()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["error"]["code"], -32600);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let addr = spawn_http().await;
    let resp = post(addr, "{\"jsonrpc\": ").await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn notifications_get_204() {
    let addr = spawn_http().await;
    let resp = post(
        addr,
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
    )
    .await;

    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_counts_sessions() {
    let addr = spawn_http().await;
    let health = |addr: SocketAddr| async move {
        reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap()
            .json::<Value>()
            .await
            .unwrap()
    };

    let before = health(addr).await;
    assert_eq!(before["status"], "ok");
    assert_eq!(before["sessions"], 0);
    assert!(before["timestamp"].is_string());

    for id in 0..2 {
        post(
            addr,
            json!({"jsonrpc": "2.0", "id": id, "method": "initialize"}).to_string(),
        )
        .await;
    }
    assert_eq!(health(addr).await["sessions"], 2);
}

#[tokio::test]
async fn root_describes_the_server() {
    let addr = spawn_http().await;
    let body: Value = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["name"], "duckduckgo-search-mcp");
    assert_eq!(body["transport"], "http");
    assert_eq!(body["protocolVersion"], "2024-11-05");
    assert_eq!(body["endpoints"], json!({"mcp": "/mcp", "health": "/health"}));
}
