//! Media standardization.
//!
//! Walks the merged tree for images, resolves their sources to absolute
//! URLs, reconciles declared dimensions against the configured maximum,
//! and associates nearby caption/attribution text. Unusable images are
//! dropped from the tree and reported as warnings, never as errors.

use crate::article::MediaItem;
use crate::config::Config;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::patterns::{normalize_whitespace, ATTRIBUTION_TEXT, CAPTION_HINT};
use crate::url_utils;

/// Standardize every image under the merged `<article>` root.
///
/// Returns the surviving images in source-document order, plus warnings
/// for each image dropped or partially resolved.
pub(crate) fn standardize(doc: &Document, config: &Config) -> (Vec<MediaItem>, Vec<String>) {
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    let base = config.url.as_deref().and_then(url_utils::parse_base_url);
    let Some(root) = doc.select("article").nodes().first().copied() else {
        return (items, warnings);
    };

    let mut to_drop: Vec<NodeRef> = Vec::new();
    let mut position = 0usize;

    for node in root.descendants() {
        if dom::node_name(&node).as_deref() != Some("img") {
            continue;
        }
        position += 1;

        let sel = Selection::from(node);
        let raw_src = dom::get_attribute(&sel, "src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| dom::get_attribute(&sel, "data-src").filter(|s| !s.trim().is_empty()));

        let Some(raw_src) = raw_src else {
            warnings.push(format!("image {position} dropped: no usable src attribute"));
            to_drop.push(node);
            continue;
        };
        let Some(src) = url_utils::resolve_url(&raw_src, base.as_ref()) else {
            warnings.push(format!(
                "image {position} dropped: could not resolve '{}'",
                raw_src.trim()
            ));
            to_drop.push(node);
            continue;
        };
        dom::set_attribute(&sel, "src", &src);

        let (width, height) = reconcile_dimensions(&sel, config, &mut warnings, position);
        let (caption, attribution) = associate_text(&node);

        items.push(MediaItem {
            src,
            width,
            height,
            caption,
            attribution,
            position,
        });
    }

    for node in to_drop {
        dom::remove(&Selection::from(node));
    }

    items.sort_by_key(|item| item.position);
    (items, warnings)
}

/// Parse declared width/height and scale both down proportionally when
/// either exceeds the configured maximum. Images are never upscaled, and
/// unreadable dimension attributes degrade to unknown with a warning.
fn reconcile_dimensions(
    sel: &Selection,
    config: &Config,
    warnings: &mut Vec<String>,
    position: usize,
) -> (Option<u32>, Option<u32>) {
    let mut parse = |name: &str| -> Option<u32> {
        let raw = dom::get_attribute(sel, name)?;
        let trimmed = raw.trim().trim_end_matches("px").trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<u32>() {
            Ok(v) if v > 0 => Some(v),
            _ => {
                warnings.push(format!(
                    "image {position}: unreadable {name} attribute '{}'",
                    raw.trim()
                ));
                None
            }
        }
    };

    let width = parse("width");
    let height = parse("height");

    let max = config.max_image_dimension;
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => {
            let longest = w.max(h);
            if longest > max {
                let scale_w = (u64::from(w) * u64::from(max) / u64::from(longest)) as u32;
                let scale_h = (u64::from(h) * u64::from(max) / u64::from(longest)) as u32;
                (Some(scale_w.max(1)), Some(scale_h.max(1)))
            } else {
                (Some(w), Some(h))
            }
        }
        // With one axis unknown the aspect ratio is unknowable; clamp the
        // known axis alone.
        (Some(w), None) => (Some(w.min(max)), None),
        (None, Some(h)) => (None, Some(h.min(max))),
        (None, None) => (None, None),
    };

    if let Some(w) = width {
        dom::set_attribute(sel, "width", &w.to_string());
    }
    if let Some(h) = height {
        dom::set_attribute(sel, "height", &h.to_string());
    }
    (width, height)
}

/// Find caption and attribution text for an image: the enclosing figure's
/// `<figcaption>` first, then caption-marked or credit-flavored adjacent
/// siblings.
fn associate_text(node: &NodeRef) -> (Option<String>, Option<String>) {
    let mut texts: Vec<String> = Vec::new();

    let mut figure: Option<NodeRef> = None;
    let mut ancestor = node.parent();
    while let Some(a) = ancestor {
        if dom::node_name(&a).as_deref() == Some("figure") {
            figure = Some(a);
            break;
        }
        ancestor = a.parent();
    }

    if let Some(fig) = figure {
        for caption_node in Selection::from(fig).select("figcaption").nodes() {
            push_text(&mut texts, &caption_node.text());
        }
    }

    // Siblings of the figure when there is one, else of the image itself.
    let anchor = figure.unwrap_or(*node);
    let siblings = [
        dom::previous_element_sibling(&anchor),
        dom::next_element_sibling(&anchor),
    ];
    for sibling in siblings.into_iter().flatten() {
        let sel = Selection::from(sibling);
        let text = normalize_whitespace(&sel.text());
        if text.is_empty() {
            continue;
        }
        let class = dom::get_attribute(&sel, "class").unwrap_or_default();
        let id = dom::get_attribute(&sel, "id").unwrap_or_default();
        let hinted = CAPTION_HINT.is_match(&class)
            || CAPTION_HINT.is_match(&id)
            || matches!(
                dom::node_name(&sibling).as_deref(),
                Some("figcaption" | "small")
            );
        if hinted || ATTRIBUTION_TEXT.is_match(&text) {
            texts.push(text);
        }
    }

    let attribution = texts.iter().find(|t| ATTRIBUTION_TEXT.is_match(t)).cloned();
    let caption = texts.iter().find(|t| !ATTRIBUTION_TEXT.is_match(t)).cloned();
    (caption, attribution)
}

fn push_text(texts: &mut Vec<String>, raw: &str) {
    let text = normalize_whitespace(raw);
    if !text.is_empty() {
        texts.push(text);
    }
}
