//! Merge and dedup: assemble the final content tree.
//!
//! Selected containers are re-rooted under a fresh `<article>` element in
//! document order (header material first on a split), then swept for
//! duplicate text blocks and images. The first occurrence of any
//! fingerprint wins; later occurrences are removed. A block is never
//! removed in favor of its own ancestor, otherwise a blockquote holding
//! the identical text of its single paragraph would eat that paragraph.

use std::collections::HashMap;

use url::Url;

use crate::config::Config;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::fingerprint::{image_fingerprint, text_fingerprint};
use crate::patterns::TEXT_BLOCK_TAGS;
use crate::select::Selected;

/// Build the merged output tree from the selected container(s).
///
/// The result is a standalone document whose `<article>` root holds the
/// deduplicated content; the working tree the selection came from is left
/// untouched.
pub(crate) fn merge(selected: &Selected, config: &Config) -> Document {
    let inner = match selected {
        Selected::Single(sel) => dom::inner_html(sel).to_string(),
        Selected::Split { header, body } => {
            format!("{}{}", dom::inner_html(header), dom::inner_html(body))
        }
    };
    let doc = Document::from(format!("<html><body><article>{inner}</article></body></html>"));
    dedup(&doc, config);
    doc
}

/// Remove blocks whose fingerprint already appeared earlier in document
/// order.
fn dedup(doc: &Document, config: &Config) {
    let base = config.url.as_deref().and_then(|u| Url::parse(u).ok());
    let Some(root) = doc.select("article").nodes().first().copied() else {
        return;
    };

    let mut seen: HashMap<String, NodeRef> = HashMap::new();
    let mut to_remove: Vec<NodeRef> = Vec::new();

    for node in root.descendants() {
        if !node.is_element() {
            continue;
        }
        if to_remove.iter().any(|dead| dom::is_ancestor_of(dead, &node)) {
            continue;
        }

        let Some(fp) = fingerprint_for(&node, base.as_ref()) else {
            continue;
        };

        match seen.get(&fp) {
            None => {
                seen.insert(fp, node);
            }
            Some(first) => {
                // The earlier occurrence may be this node's own wrapper;
                // removing the inner block would lose the content itself.
                if !dom::is_ancestor_of(first, &node) {
                    to_remove.push(node);
                }
            }
        }
    }

    for node in to_remove {
        dom::remove(&Selection::from(node));
    }
}

fn fingerprint_for(node: &NodeRef, base: Option<&Url>) -> Option<String> {
    let tag = dom::node_name(node)?;
    if tag == "img" {
        let sel = Selection::from(*node);
        let src = dom::get_attribute(&sel, "src")
            .or_else(|| dom::get_attribute(&sel, "data-src"))?;
        return image_fingerprint(&src, base).map(|fp| format!("img:{fp}"));
    }
    if TEXT_BLOCK_TAGS.contains(&tag.as_str()) {
        return text_fingerprint(&node.text()).map(|fp| format!("text:{fp}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_from<'a>(doc: &'a Document, selector: &str) -> Selected<'a> {
        Selected::Single(doc.select(selector))
    }

    #[test]
    fn single_container_is_rerooted_under_article() {
        let doc = Document::from(
            r#"<html><body><div id="c"><p>Only paragraph in the piece.</p></div></body></html>"#,
        );
        let merged = merge(&single_from(&doc, "#c"), &Config::default());

        assert!(merged.select("article > p").exists());
        assert!(merged.select("#c").is_empty());
    }

    #[test]
    fn split_preserves_document_order() {
        let doc = Document::from(
            r#"<html><body>
                <header id="h"><h1>Headline</h1></header>
                <div id="b"><p>Body paragraph follows the headline.</p></div>
            </body></html>"#,
        );
        let selected = Selected::Split {
            header: doc.select("#h"),
            body: doc.select("#b"),
        };
        let merged = merge(&selected, &Config::default());

        let html = merged.select("article").inner_html().to_string();
        let h1_at = html.find("<h1>");
        let p_at = html.find("<p>");
        assert!(h1_at.is_some() && p_at.is_some());
        assert!(h1_at < p_at, "headline must precede body: {html}");
    }

    #[test]
    fn duplicate_teaser_paragraph_is_removed_once() {
        let doc = Document::from(
            r#"<html><body><div id="c">
                <p>The council approved the plan on Monday.</p>
                <p>Further details emerged during the evening session.</p>
                <p>The council approved the plan, on monday!</p>
            </div></body></html>"#,
        );
        let merged = merge(&single_from(&doc, "#c"), &Config::default());

        // Third paragraph fingerprints identically to the first despite
        // punctuation and case differences.
        assert_eq!(merged.select("article p").length(), 2);
        assert!(merged
            .select("article")
            .text()
            .contains("evening session"));
    }

    #[test]
    fn duplicate_images_collapse_ignoring_query_params() {
        let doc = Document::from(
            r#"<html><body><div id="c">
                <p>Lead paragraph around the pictures.</p>
                <img src="https://cdn.example.com/a.jpg?w=800">
                <img src="https://cdn.example.com/a.jpg?w=400">
            </div></body></html>"#,
        );
        let merged = merge(&single_from(&doc, "#c"), &Config::default());

        assert_eq!(merged.select("article img").length(), 1);
    }

    #[test]
    fn nested_identical_text_keeps_the_inner_block() {
        let doc = Document::from(
            r#"<html><body><div id="c">
                <blockquote><p>A quote repeated verbatim nowhere else.</p></blockquote>
            </div></body></html>"#,
        );
        let merged = merge(&single_from(&doc, "#c"), &Config::default());

        // The blockquote and its only paragraph share a fingerprint; the
        // paragraph must survive inside it.
        assert!(merged.select("article blockquote p").exists());
    }

    #[test]
    fn removing_a_block_drops_its_descendants_with_it() {
        let doc = Document::from(
            r#"<html><body><div id="c">
                <blockquote><p>Same pull quote text.</p></blockquote>
                <blockquote><p>Same pull quote text.</p></blockquote>
            </div></body></html>"#,
        );
        let merged = merge(&single_from(&doc, "#c"), &Config::default());

        assert_eq!(merged.select("article blockquote").length(), 1);
        assert_eq!(merged.select("article p").length(), 1);
    }
}
