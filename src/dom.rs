//! Thin adapter over `dom_query`.
//!
//! Gathers the handful of DOM operations the extraction pipeline needs
//! behind stable names, so the rest of the crate never touches
//! `dom_query` internals directly.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

/// Get any attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Get tag name of a node (lowercase), `None` for non-elements.
#[must_use]
pub fn node_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing; use `.to_string()` only
/// when owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Remove elements from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Get the next element sibling, skipping text nodes.
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Get the previous element sibling, skipping text nodes.
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// Check whether `ancestor` is an ancestor of `node` within the same tree.
#[must_use]
pub fn is_ancestor_of(ancestor: &NodeRef, node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.id == ancestor.id {
            return true;
        }
        current = n.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_and_attribute_access() {
        let doc = Document::from(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");
        let Some(node) = div.nodes().first() else {
            panic!("missing div")
        };

        assert_eq!(node_name(node), Some("div".to_string()));
        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(get_attribute(&div, "data-x"), None);
    }

    #[test]
    fn remove_detaches_subtree() {
        let doc = Document::from(r#"<div><span class="ad">ad</span><p>content</p></div>"#);
        remove(&doc.select(".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn element_sibling_navigation_skips_text() {
        let doc = Document::from(r#"<div><p id="a">A</p> text <p id="b">B</p></div>"#);
        let a = doc.select("#a");
        let Some(node) = a.nodes().first() else {
            panic!("missing #a")
        };

        let next = next_element_sibling(node);
        assert!(next.is_some());
        if let Some(next) = next {
            assert_eq!(node_name(&next), Some("p".to_string()));
            assert!(previous_element_sibling(&next).is_some());
        }
    }

    #[test]
    fn ancestor_check_walks_to_root() {
        let doc = Document::from(r#"<div id="outer"><section><p id="inner">x</p></section></div>"#);
        let outer = doc.select("#outer");
        let inner = doc.select("#inner");
        let (Some(outer_node), Some(inner_node)) = (outer.nodes().first(), inner.nodes().first())
        else {
            panic!("missing nodes")
        };

        assert!(is_ancestor_of(outer_node, inner_node));
        assert!(!is_ancestor_of(inner_node, outer_node));
    }
}
