//! Content fingerprints for duplicate detection.
//!
//! Two blocks with equal fingerprints are treated as the same content
//! regardless of surface formatting: text keys are lowercased,
//! whitespace-collapsed and punctuation-stripped; image keys are the
//! resolved absolute URL with query and fragment removed.

use url::Url;

/// Normalized fingerprint of a text block.
///
/// Returns `None` for text with no alphanumeric content, which must never
/// participate in deduplication.
#[must_use]
pub fn text_fingerprint(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else if ch.is_whitespace() {
            pending_space = true;
        }
        // Punctuation is dropped without acting as a separator.
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Normalized fingerprint of an image source.
///
/// Resolves against `base` when the source is relative, then strips query
/// parameters and fragments so cache-busting variants of the same asset
/// collapse to one key. Unresolvable sources fall back to the raw path
/// with the query chopped off; empty sources yield `None`.
#[must_use]
pub fn image_fingerprint(src: &str, base: Option<&Url>) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    let resolved = match Url::parse(src) {
        Ok(url) => Some(url),
        Err(_) => base.and_then(|b| b.join(src).ok()),
    };

    if let Some(mut url) = resolved {
        url.set_query(None);
        url.set_fragment(None);
        return Some(url.to_string());
    }

    let bare = src.split(['?', '#']).next().unwrap_or(src);
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}
