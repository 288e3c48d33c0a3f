//! URL helpers for base resolution of media sources.

use url::Url;

/// Parse a page URL for use as a resolution base. Only URLs with a host
/// qualify; anything else is treated as no base at all.
#[must_use]
pub fn parse_base_url(url: &str) -> Option<Url> {
    Url::parse(url.trim()).ok().filter(|u| u.host().is_some())
}

/// Resolve an image source to an absolute URL string.
///
/// Already-absolute URLs (and self-contained `data:` URIs) pass through;
/// relative sources join against `base`. Returns `None` when the source
/// is empty or relative with no usable base.
#[must_use]
pub fn resolve_url(src: &str, base: Option<&Url>) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(src) {
        if url.host().is_some() || url.scheme() == "data" {
            return Some(url.to_string());
        }
    }
    base.and_then(|b| b.join(src).ok())
        .filter(|u| u.host().is_some())
        .map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_url("https://cdn.example.com/a.jpg", None),
            Some("https://cdn.example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn relative_urls_need_a_base() {
        assert_eq!(resolve_url("/img/a.jpg", None), None);

        let base = parse_base_url("https://example.com/news/story.html");
        assert!(base.is_some());
        assert_eq!(
            resolve_url("/img/a.jpg", base.as_ref()),
            Some("https://example.com/img/a.jpg".to_string())
        );
        assert_eq!(
            resolve_url("img/a.jpg", base.as_ref()),
            Some("https://example.com/news/img/a.jpg".to_string())
        );
    }

    #[test]
    fn protocol_relative_urls_join_against_base() {
        let base = parse_base_url("https://example.com/news/");
        assert_eq!(
            resolve_url("//cdn.example.com/a.jpg", base.as_ref()),
            Some("https://cdn.example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn garbage_bases_are_rejected() {
        assert!(parse_base_url("not a url").is_none());
        assert!(parse_base_url("mailto:x@example.com").is_none());
    }
}
