//! Title and publication-date metadata.
//!
//! Metadata is read from the document head before cleaning, in fixed
//! priority order: OpenGraph/Twitter meta tags, JSON-LD, then visible
//! markup fallbacks. Absent metadata degrades to `None`; it never fails
//! an extraction.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::dom::{self, Document, Selection};
use crate::patterns::{normalize_whitespace, TITLE_SEPARATOR};

const TITLE_META_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
];

const DATE_META_SELECTORS: &[&str] = &[
    r#"meta[property="article:published_time"]"#,
    r#"meta[property="og:article:published_time"]"#,
    r#"meta[itemprop="datePublished"]"#,
    r#"meta[name="date"]"#,
    r#"meta[name="publish-date"]"#,
    r#"meta[name="publication_date"]"#,
];

/// Extract the article headline.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    for selector in TITLE_META_SELECTORS {
        if let Some(content) = meta_content(doc, selector) {
            return Some(content);
        }
    }
    if let Some(headline) = json_ld_string(doc, "headline") {
        return Some(headline);
    }

    // <title> carries the site name after a separator more often than not;
    // the first segment is the headline.
    let title = normalize_whitespace(&doc.select("head title").text());
    if !title.is_empty() {
        let first = TITLE_SEPARATOR.split(&title).next().unwrap_or(&title);
        let first = first.trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    let h1 = normalize_whitespace(&doc.select("h1").text());
    if h1.is_empty() {
        None
    } else {
        Some(h1)
    }
}

/// Extract the publication date, normalized to `YYYY-MM-DD` when the raw
/// value parses; otherwise the trimmed raw value is kept as-is.
#[must_use]
pub fn extract_published_date(doc: &Document) -> Option<String> {
    let mut raw: Option<String> = None;
    for selector in DATE_META_SELECTORS {
        if let Some(content) = meta_content(doc, selector) {
            raw = Some(content);
            break;
        }
    }
    if raw.is_none() {
        raw = json_ld_string(doc, "datePublished");
    }
    if raw.is_none() {
        let time = doc.select("time[datetime]");
        raw = dom::get_attribute(&time, "datetime")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
    }

    let raw = raw?;
    Some(normalize_date(&raw).unwrap_or(raw))
}

fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    let sel = doc.select(selector);
    dom::get_attribute(&sel, "content")
        .map(|v| normalize_whitespace(&v))
        .filter(|v| !v.is_empty())
}

/// Pull the first non-empty string value for `key` out of any JSON-LD
/// block, descending through arrays and `@graph` wrappers.
fn json_ld_string(doc: &Document, key: &str) -> Option<String> {
    for node in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let text = Selection::from(*node).text();
        let Ok(value) = serde_json::from_str::<Value>(text.trim()) else {
            continue;
        };
        if let Some(found) = find_string(&value, key) {
            return Some(found);
        }
    }
    None
}

fn find_string(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(s)) = map.get(key) {
                let s = s.trim();
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
            map.get("@graph").and_then(|graph| find_string(graph, key))
        }
        Value::Array(items) => items.iter().find_map(|item| find_string(item, key)),
        _ => None,
    }
}

fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date().format("%Y-%m-%d").to_string());
    }
    for format in [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d/%m/%Y",
        "%m/%d/%Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %B %Y",
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}
