//! Text and URL cleanup for scraped result markup
//!
//! Both functions are pure and never fail: input they cannot make sense of
//! is passed through.

use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;

/// Query parameter DuckDuckGo uses to carry the real target of a redirect link
const REDIRECT_PARAM: &str = "uddg=";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Resolve a result link to the URL it points at
///
/// - `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...` becomes
///   `https://example.com`
/// - protocol-relative `//host/path` becomes `https://host/path`
/// - anything else is returned unchanged
pub fn clean_url(raw: &str) -> String {
    if let Some(pos) = raw.find(REDIRECT_PARAM) {
        let start = pos + REDIRECT_PARAM.len();
        let end = raw[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(raw.len());

        return match percent_decode_str(&raw[start..end]).decode_utf8() {
            Ok(target) => target.into_owned(),
            Err(_) => raw.to_string(),
        };
    }

    if raw.starts_with("//") {
        return format!("https:{}", raw);
    }

    raw.to_string()
}

/// Turn a markup fragment into display text
///
/// Strips tags, decodes the handful of entities DuckDuckGo emits, collapses
/// whitespace and trims. Stripping and decoding repeat until nothing changes
/// so that `clean_text(clean_text(x)) == clean_text(x)`; decoding `&lt;b&gt;`
/// yields a tag which is then stripped as well.
pub fn clean_text(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let next = decode_entities(&TAG_RE.replace_all(&text, ""));
        if next == text {
            break;
        }
        text = next;
    }

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}
