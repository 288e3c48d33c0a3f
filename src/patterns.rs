//! Compiled regex patterns, tag tables, and the default noise vocabulary.
//!
//! All patterns are compiled once at startup using `LazyLock`. The noise
//! vocabulary is a closed list of normalized tokens matched against class/id
//! attribute tokens, not free substring probing, so a content class like
//! `article-header` is never mistaken for a navigation header.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tag tables
// =============================================================================

/// Tags removed outright during the pre-cleaning pass. These never carry
/// article text and routinely confuse density scoring.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "form", "button", "input",
    "select", "textarea", "svg", "template", "audio", "embed", "object",
];

/// Tags removed when they do not shelter the article headline.
/// A `<footer>` inside an article can legitimately hold the byline block,
/// so footers containing an `h1` are conservative-kept.
pub const GUARDED_NOISE_TAGS: &[&str] = &["nav", "aside", "footer"];

/// Block-level containers eligible as content candidates. Inline elements
/// never stop the selector DFS.
pub const CONTAINER_TAGS: &[&str] = &["article", "main", "section", "div", "header", "body"];

/// Elements treated as one text block for fingerprint deduplication.
pub const TEXT_BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "li", "pre",
];

/// Containers pruned when empty of both text and media.
pub const PRUNABLE_TAGS: &[&str] = &["div", "section", "span", "ul", "ol", "li", "figure", "header", "footer", "aside"];

/// Tags that count as media when deciding whether a container is empty.
pub const MEDIA_TAGS: &[&str] = &["img", "picture", "video", "figure"];

// =============================================================================
// Noise vocabulary
// =============================================================================

/// Default noise-term vocabulary matched against class/id tokens.
///
/// Terms are single normalized tokens; attribute values are split on
/// non-alphanumeric boundaries before matching. Deliberately absent:
/// `header`, `title`, `meta`, `content` - those appear in content-bearing
/// compound classes and would cause false positives.
pub const DEFAULT_NOISE_TERMS: &[&str] = &[
    "share", "sharing", "social", "newsletter", "subscribe", "subscription",
    "related", "recommend", "recommended", "recommendation", "recommendations",
    "sidebar", "comment", "comments", "promo", "promotion", "sponsor",
    "sponsored", "advert", "advertisement", "ads", "banner", "popup", "modal",
    "overlay", "cookie", "gdpr", "consent", "breadcrumb", "breadcrumbs",
    "pagination", "widget", "trending", "popular", "signup", "signin", "login",
    "register", "nav", "navbar", "navigation", "menu", "taboola", "outbrain",
    "paywall", "toolbar", "masthead", "skyscraper", "outstream",
];

// =============================================================================
// Structural hint patterns
// =============================================================================

/// Matches class/id names that mark a header region in a split article.
pub static HEADER_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(header|headline|hero|page[-_]?title|article[-_]?title)").expect("HEADER_HINT regex")
});

/// Matches class/id names that mark caption or credit text near an image.
pub static CAPTION_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(caption|credit|attribution|cutline|wp[-_]?caption)").expect("CAPTION_HINT regex")
});

/// Matches attribution text patterns ("Photo:", "Credit:", "©", "(c)").
pub static ATTRIBUTION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\b)(?:photo(?:graph)?|image|credit|source)\s*[:：]|©|\(c\)").expect("ATTRIBUTION_TEXT regex")
});

/// Matches common separators between article title and site name.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[\|–—·»-]\s+").expect("TITLE_SEPARATOR regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Collapses whitespace runs into single spaces and trims the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_no_content_bearing_terms() {
        for term in ["header", "title", "content", "article", "story", "body"] {
            assert!(
                !DEFAULT_NOISE_TERMS.contains(&term),
                "{term} must not be in the noise vocabulary"
            );
        }
    }

    #[test]
    fn attribution_pattern_matches_common_forms() {
        assert!(ATTRIBUTION_TEXT.is_match("Photo: Jane Doe"));
        assert!(ATTRIBUTION_TEXT.is_match("Credit: Reuters"));
        assert!(ATTRIBUTION_TEXT.is_match("© 2024 AP"));
        assert!(!ATTRIBUTION_TEXT.is_match("The ceremony took place at noon."));
    }

    #[test]
    fn title_separator_splits_site_suffix() {
        let parts: Vec<&str> = TITLE_SEPARATOR.split("Big Story | Example News").collect();
        assert_eq!(parts, vec!["Big Story", "Example News"]);
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace(""), "");
    }
}
