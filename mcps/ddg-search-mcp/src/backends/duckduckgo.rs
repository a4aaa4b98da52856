//! DuckDuckGo backend
//!
//! Implements the SearchBackend trait by scraping the HTML-only results page
//! at `html.duckduckgo.com`, which needs no API key.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::{Duration, Instant};

use super::SearchBackend;
use crate::config::SearchConfig;
use crate::error::{ServerError, ServerResult};
use crate::extract::ResultExtractor;
use crate::types::SearchRecord;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// DuckDuckGo HTML backend
pub struct DuckDuckGoBackend {
    client: Client,
    config: SearchConfig,
    extractor: ResultExtractor,
}

impl DuckDuckGoBackend {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            config,
            extractor: ResultExtractor::duckduckgo(),
        })
    }

    /// Fetch the raw results page for a query
    async fn fetch_page(&self, query: &str) -> ServerResult<String> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServerError::Upstream(format!(
                "DuckDuckGo returned status {}",
                response.status().as_u16()
            )));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoBackend {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str, limit: usize) -> ServerResult<Vec<SearchRecord>> {
        let started = Instant::now();

        let html = self.fetch_page(query).await.inspect_err(|e| {
            tracing::warn!("DuckDuckGo request for {:?} failed: {}", query, e);
        })?;

        let records = self.extractor.extract(&html, limit);
        tracing::info!(
            query,
            results = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "DuckDuckGo search completed"
        );

        Ok(records)
    }
}
