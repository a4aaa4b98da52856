//! Local stand-in for html.duckduckgo.com
//!
//! The query selects the page served:
//! - `nothing`: a page without results
//! - `broken`: `503 Service Unavailable`
//! - `slow`: three results after a three second delay
//! - `echo-headers`: one result whose title is the request's User-Agent
//!   and whose snippet is its Accept-Language
//! - anything else: three results

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use ddg_search_mcp::config::SearchConfig;
use ddg_search_mcp::session::SessionRegistry;
use ddg_search_mcp::{DuckDuckGoBackend, SearchMcpServer};

pub fn result_block(i: usize, title: &str, snippet: &str) -> String {
    format!(
        r#"<div class="result results_links results_links_deep web-result ">
  <div class="links_main links_deep result__body">
    <h2 class="result__title">
      <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage%2F{i}&amp;rut=f00">{title}</a>
    </h2>
    <div class="result__extras">
      <div class="result__extras__url">
        <a class="result__url" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage%2F{i}">example.com/page/{i}</a>
      </div>
    </div>
    <a class="result__snippet" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage%2F{i}">{snippet}</a>
    <div class="clear"></div>
  </div>
</div>"#
    )
}

pub fn results_page(blocks: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><body><div id=\"links\" class=\"results\">{}</div></body></html>",
        blocks.join("\n")
    )
}

fn three_results() -> String {
    results_page(&[
        result_block(1, "The <b>Rust</b> Programming Language", "Learn Rust &amp; more"),
        result_block(2, "Rust by Example", "A collection of runnable examples"),
        result_block(3, "crates.io: Rust Package Registry", ""),
    ])
}

async fn results(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    match query {
        "nothing" => Html(results_page(&[])).into_response(),
        "broken" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Html(three_results()).into_response()
        }
        "echo-headers" => {
            let value = |name: header::HeaderName| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            };
            let page = results_page(&[result_block(
                1,
                &value(header::USER_AGENT),
                &value(header::ACCEPT_LANGUAGE),
            )]);
            Html(page).into_response()
        }
        _ => Html(three_results()).into_response(),
    }
}

/// Start the fixture on an ephemeral port and return its address
pub async fn spawn_fixture() -> SocketAddr {
    let app = Router::new().route("/html/", get(results));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Search settings pointing at a running fixture
pub fn fixture_config(addr: SocketAddr) -> SearchConfig {
    SearchConfig {
        endpoint: format!("http://{addr}/html/"),
        timeout_seconds: 1,
        ..SearchConfig::default()
    }
}

/// A dispatcher backed by the real DuckDuckGo backend aimed at a fresh fixture
pub async fn fixture_server() -> SearchMcpServer {
    let addr = spawn_fixture().await;
    let backend = DuckDuckGoBackend::new(fixture_config(addr)).unwrap();
    SearchMcpServer::new(std::sync::Arc::new(backend), SessionRegistry::new())
}
