//! Configuration surface for content extraction.
//!
//! All tunables are loaded once per [`Config`] value and treated as
//! read-only for the lifetime of the extraction; the core keeps no other
//! state between calls.

use std::collections::HashMap;

use crate::patterns::DEFAULT_NOISE_TERMS;

/// Configuration for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use declutter::Config;
///
/// let config = Config {
///     url: Some("https://example.com/news/story".to_string()),
///     min_content_score: 50.0,
///     ..Config::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Source URL of the document, used only to resolve relative media
    /// links and record provenance.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Minimum total score a container must reach to become a candidate.
    /// A document where no container reaches this threshold yields
    /// `Error::NoContent`. The comparison is inclusive: a container scoring
    /// exactly at the threshold is a candidate.
    ///
    /// Default: `25.0`
    pub min_content_score: f64,

    /// Factor applied to each child's total score when accumulating into
    /// its parent. Must be below 1.0 so descendant contributions diminish
    /// with depth and a root wrapper cannot win by mere aggregation.
    ///
    /// Default: `0.6`
    pub dampening_factor: f64,

    /// Maximum ratio between the best and second-best non-overlapping
    /// candidate for the pair to be reported as a header/body split.
    /// When the best candidate dominates by more than this ratio it is
    /// selected alone.
    ///
    /// Default: `5.0`
    pub split_dominance_ratio: f64,

    /// Upper bound for explicit image dimensions. Larger images are scaled
    /// down preserving aspect ratio; images are never upscaled.
    ///
    /// Default: `1024`
    pub max_image_dimension: u32,

    /// Noise-term vocabulary matched against class/id attribute tokens.
    ///
    /// Default: [`crate::patterns::DEFAULT_NOISE_TERMS`]
    pub noise_terms: Vec<String>,

    /// Per-tag score weight table. Missing tags weigh zero (neutral).
    /// Positive weights boost semantic content containers, negative
    /// weights penalize navigation chrome.
    ///
    /// Default: see [`default_tag_weights`]
    pub tag_weights: HashMap<String, i32>,
}

impl Config {
    /// Look up the weight for a tag name, defaulting to neutral.
    #[must_use]
    pub fn tag_weight(&self, tag: &str) -> i32 {
        self.tag_weights.get(tag).copied().unwrap_or(0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            min_content_score: 25.0,
            dampening_factor: 0.6,
            split_dominance_ratio: 5.0,
            max_image_dimension: 1024,
            noise_terms: DEFAULT_NOISE_TERMS.iter().map(|s| (*s).to_string()).collect(),
            tag_weights: default_tag_weights(),
        }
    }
}

/// Default per-tag weight table.
///
/// `article`/`main` get a strong positive bonus, `aside`/`nav`/`footer` a
/// strong penalty, generic containers stay neutral. The weight is turned
/// into a multiplier on the node's own text contribution; see
/// [`crate::score::weight_multiplier`].
#[must_use]
pub fn default_tag_weights() -> HashMap<String, i32> {
    [
        ("article", 8),
        ("main", 8),
        ("section", 2),
        ("header", 2),
        ("figure", 1),
        ("blockquote", 1),
        ("p", 3),
        ("h1", 4),
        ("h2", 3),
        ("h3", 2),
        ("li", -1),
        ("td", -1),
        ("span", -1),
        ("aside", -8),
        ("nav", -8),
        ("footer", -8),
        ("form", -6),
        ("button", -6),
    ]
    .into_iter()
    .map(|(tag, weight)| (tag.to_string(), weight))
    .collect()
}
