//! Noise filter: structural removal of non-content nodes.
//!
//! Runs twice per extraction. The pre pass cleans the whole working tree so
//! density scoring stays honest; the post pass sweeps the selected/merged
//! container for noise that survived because it was nested inside the chosen
//! content (an in-article "related stories" block, say).
//!
//! Removal is conservative: a node is only deleted when it positively
//! matches the noise classification. Residual noise is acceptable; deleted
//! article content is not. Elements sheltering an `h1` or three or more
//! paragraphs are never removed by vocabulary match.

use std::collections::HashSet;

use crate::config::Config;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::patterns::{GUARDED_NOISE_TAGS, MEDIA_TAGS, NOISE_TAGS, PRUNABLE_TAGS};

/// Which cleaning pass is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanPass {
    /// Full-tree cleaning before container selection.
    Pre,
    /// Sweep of the merged container after selection.
    Post,
}

/// Clean the tree in place. Idempotent: running the same pass twice on the
/// same tree removes nothing the second time.
pub fn clean(doc: &Document, pass: CleanPass, config: &Config) {
    if pass == CleanPass::Pre {
        remove_noise_tags(doc);
    }
    remove_vocabulary_matches(doc, config);
    prune_empty_containers(doc);
}

/// Remove tags that never carry article content, plus guarded structural
/// chrome (nav/aside/footer) that does not shelter the headline.
fn remove_noise_tags(doc: &Document) {
    doc.select(&NOISE_TAGS.join(", ")).remove();

    let guarded: Vec<NodeRef> = doc
        .select(&GUARDED_NOISE_TAGS.join(", "))
        .nodes()
        .iter()
        .copied()
        .collect();
    for node in guarded {
        let sel = Selection::from(node);
        if !sel.select("h1").exists() {
            dom::remove(&sel);
        }
    }
}

/// Remove elements whose class/id tokens match the noise vocabulary.
fn remove_vocabulary_matches(doc: &Document, config: &Config) {
    let terms: HashSet<&str> = config.noise_terms.iter().map(String::as_str).collect();

    let mut to_remove: Vec<NodeRef> = Vec::new();
    for node in doc.select("[class], [id]").nodes() {
        let sel = Selection::from(*node);
        let tag = dom::node_name(node).unwrap_or_default();

        // The article's own structural spine is never vocabulary-removed.
        if matches!(tag.as_str(), "html" | "body" | "article" | "main") {
            continue;
        }

        let class = dom::get_attribute(&sel, "class").unwrap_or_default();
        let id = dom::get_attribute(&sel, "id").unwrap_or_default();
        if !tokens_match(&class, &terms) && !tokens_match(&id, &terms) {
            continue;
        }

        // Conservative-keep: a matched container that still holds the
        // headline or substantial paragraphs cannot be positively
        // classified as noise.
        if sel.select("h1").exists() || sel.select("p").length() >= 3 {
            continue;
        }

        if to_remove.iter().any(|kept| dom::is_ancestor_of(kept, node)) {
            continue;
        }
        to_remove.push(*node);
    }

    for node in to_remove {
        dom::remove(&Selection::from(node));
    }
}

/// Split an attribute value on non-alphanumeric boundaries and check each
/// token against the vocabulary. Token matching keeps compound content
/// classes like `article-header` safe from the `nav`/`menu` terms.
fn tokens_match(value: &str, terms: &HashSet<&str>) -> bool {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|tok| !tok.is_empty())
        .any(|tok| terms.contains(tok.to_ascii_lowercase().as_str()))
}

/// Repeatedly remove containers with no text and no media, until stable.
/// Children are always filtered before their parents become removable, so
/// a wrapper emptied by earlier removals is caught on the next sweep.
fn prune_empty_containers(doc: &Document) {
    let prunable_selector = PRUNABLE_TAGS.join(", ");
    let media_selector = MEDIA_TAGS.join(", ");

    loop {
        let mut removed = 0usize;
        let nodes: Vec<NodeRef> = doc
            .select(&prunable_selector)
            .nodes()
            .iter()
            .copied()
            .collect();

        for node in nodes {
            let sel = Selection::from(node);
            let tag = dom::node_name(&node).unwrap_or_default();
            if tag == "figure" && sel.select("img").exists() {
                continue;
            }
            if !dom::text_content(&sel).trim().is_empty() {
                continue;
            }
            if sel.select(&media_selector).exists() {
                continue;
            }
            dom::remove(&sel);
            removed += 1;
        }

        if removed == 0 {
            break;
        }
    }
}
