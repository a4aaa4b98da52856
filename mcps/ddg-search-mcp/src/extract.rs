//! Result extraction from DuckDuckGo's HTML results page
//!
//! This is a tolerant scanner, not an HTML parser. Extraction runs in two
//! passes:
//!
//! 1. **Primary**: every `<div class="result ...">` container is searched
//!    for its first `result__a` anchor (link + title) and its first
//!    `result__snippet` element. A container runs from its opening tag to
//!    the next container (or the end of the document), so nested blocks
//!    such as `result__extras` do not cut it short.
//! 2. **Fallback**: only when the primary pass found nothing, bare
//!    `result__url` anchors are collected with empty snippets.
//!
//! A candidate is kept only when both its cleaned URL and title are
//! non-empty. Candidates that do not fit the markers are skipped, never
//! reported as errors.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::sanitize::{clean_text, clean_url};
use crate::types::SearchRecord;

static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div\s[^>]*\bclass="result(?:\s[^"]*)?"[^>]*>"#).unwrap()
});
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s([^>]*\bclass="result__a"[^>]*)>(.*?)</a>"#).unwrap()
});
static SNIPPET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<(?:a|div|span|td)\s[^>]*\bclass="result__snippet"[^>]*>(.*?)</(?:a|div|span|td)>"#,
    )
    .unwrap()
});
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s([^>]*\bclass="result__url"[^>]*)>(.*?)</a>"#).unwrap()
});
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bhref\s*=\s*"([^"]*)""#).unwrap());

/// Two-pass extraction strategy
///
/// The markers are provider specific; [`ResultExtractor::duckduckgo`] holds
/// the ones for `html.duckduckgo.com`.
#[derive(Debug, Clone, Copy)]
pub struct ResultExtractor {
    container: &'static Regex,
    title: &'static Regex,
    snippet: &'static Regex,
    link: &'static Regex,
}

impl ResultExtractor {
    /// Markers for DuckDuckGo's HTML results page
    pub fn duckduckgo() -> Self {
        Self {
            container: &CONTAINER_RE,
            title: &TITLE_RE,
            snippet: &SNIPPET_RE,
            link: &LINK_RE,
        }
    }

    /// Extract at most `limit` records, in document order
    pub fn extract(&self, document: &str, limit: usize) -> Vec<SearchRecord> {
        let records = self.primary_pass(document, limit);
        if !records.is_empty() {
            tracing::debug!("Primary pass extracted {} result(s)", records.len());
            return records;
        }

        let records = self.fallback_pass(document, limit);
        tracing::debug!("Fallback pass extracted {} result(s)", records.len());
        records
    }

    fn primary_pass(&self, document: &str, limit: usize) -> Vec<SearchRecord> {
        let mut records = Vec::new();

        for body in self.containers(document) {
            if records.len() >= limit {
                break;
            }
            let Some(title) = self.title.captures(body) else {
                tracing::trace!("Skipping result container without a title link");
                continue;
            };
            let Some((url, title)) = link_parts(&title) else {
                tracing::trace!("Skipping result with empty title or URL");
                continue;
            };

            let snippet = self
                .snippet
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| clean_text(m.as_str()))
                .unwrap_or_default();

            records.push(SearchRecord {
                title,
                url,
                snippet,
            });
        }

        records
    }

    /// Bodies of the result containers, in document order
    fn containers<'d>(&self, document: &'d str) -> Vec<&'d str> {
        let openings: Vec<_> = self.container.find_iter(document).collect();
        openings
            .iter()
            .enumerate()
            .map(|(i, opening)| {
                let end = openings
                    .get(i + 1)
                    .map_or(document.len(), |next| next.start());
                &document[opening.end()..end]
            })
            .collect()
    }

    fn fallback_pass(&self, document: &str, limit: usize) -> Vec<SearchRecord> {
        self.link
            .captures_iter(document)
            .filter_map(|link| {
                let url = href(&link).map(clean_url)?;
                if url.is_empty() {
                    return None;
                }
                let text = link.get(2).map(|m| clean_text(m.as_str())).unwrap_or_default();
                let title = if text.is_empty() { url.clone() } else { text };
                Some(SearchRecord {
                    title,
                    url,
                    snippet: String::new(),
                })
            })
            .take(limit)
            .collect()
    }
}

impl Default for ResultExtractor {
    fn default() -> Self {
        Self::duckduckgo()
    }
}

/// Cleaned `(url, title)` of an anchor match, if both are non-empty
fn link_parts(anchor: &Captures<'_>) -> Option<(String, String)> {
    let url = clean_url(href(anchor)?);
    let title = clean_text(anchor.get(2)?.as_str());
    if url.is_empty() || title.is_empty() {
        return None;
    }
    Some((url, title))
}

/// Raw `href` from the attribute group of an anchor match
fn href<'a>(anchor: &Captures<'a>) -> Option<&'a str> {
    let attrs = anchor.get(1)?.as_str();
    HREF_RE
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract with the DuckDuckGo markers
pub fn extract(document: &str, limit: usize) -> Vec<SearchRecord> {
    ResultExtractor::duckduckgo().extract(document, limit)
}
