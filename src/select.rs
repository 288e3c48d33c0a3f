//! Container selection.
//!
//! Walks the scored tree and picks the container holding the main content.
//! Ambiguity between a dominant candidate and a strong, structurally
//! adjacent runner-up is resolved as a header/body split rather than an
//! error: the pipeline merges the pair downstream.

use std::cmp::Ordering;

use crate::config::Config;
use crate::dom::{self, Document, NodeRef, Selection};
use crate::patterns::HEADER_HINT;
use crate::score::{score_tree, ScoredNode};

/// Outcome of container selection.
#[derive(Debug)]
pub enum Selected<'a> {
    /// One container dominates; extract it alone.
    Single(Selection<'a>),
    /// Two adjacent containers share the content: a headline/lead block
    /// followed by the body. `header` always precedes `body` in document
    /// order.
    Split {
        header: Selection<'a>,
        body: Selection<'a>,
    },
}

/// Pick the content container(s) for the document, or `None` when no
/// candidate clears the content threshold.
pub fn select_container<'a>(doc: &'a Document, config: &Config) -> Option<Selected<'a>> {
    let root = doc.select("body").nodes().first().copied()?;

    let mut candidates = score_tree(root, config);
    if candidates.is_empty() {
        return None;
    }
    candidates.sort_by(rank);

    let best = candidates.first()?;
    // Runner-up must not share a line of ancestry with the winner; a
    // nested candidate is the same content, not a competing block.
    let rival = candidates
        .iter()
        .skip(1)
        .find(|c| !overlaps(&best.node, &c.node));

    if let Some(rival) = rival {
        if !dominates(best, rival, config) && structurally_adjacent(&best.node, &rival.node) {
            let (first, second) = if best.order < rival.order {
                (best, rival)
            } else {
                (rival, best)
            };
            if has_header_signal(&first.node) {
                return Some(Selected::Split {
                    header: Selection::from(first.node),
                    body: Selection::from(second.node),
                });
            }
        }
    }

    Some(Selected::Single(Selection::from(best.node)))
}

/// Highest total score first; ties break to the shallower node, then to
/// the earlier one in document order. Never panics on NaN.
fn rank(a: &ScoredNode<'_>, b: &ScoredNode<'_>) -> Ordering {
    b.score
        .total_score
        .partial_cmp(&a.score.total_score)
        .unwrap_or(Ordering::Equal)
        .then(a.depth.cmp(&b.depth))
        .then(a.order.cmp(&b.order))
}

fn dominates(best: &ScoredNode<'_>, rival: &ScoredNode<'_>, config: &Config) -> bool {
    best.score.total_score > rival.score.total_score * config.split_dominance_ratio
}

fn overlaps(a: &NodeRef, b: &NodeRef) -> bool {
    a.id == b.id || dom::is_ancestor_of(a, b) || dom::is_ancestor_of(b, a)
}

fn same_parent(a: &NodeRef, b: &NodeRef) -> bool {
    match (a.parent(), b.parent()) {
        (Some(pa), Some(pb)) => pa.id == pb.id,
        _ => false,
    }
}

/// Adjacent means siblings, or one node's parent is a sibling of the
/// other. That covers the common wrapper-around-header markup without
/// letting distant blocks pair up.
fn structurally_adjacent(a: &NodeRef, b: &NodeRef) -> bool {
    if same_parent(a, b) {
        return true;
    }
    if let Some(pa) = a.parent() {
        if pa.is_element() && same_parent(&pa, b) {
            return true;
        }
    }
    if let Some(pb) = b.parent() {
        if pb.is_element() && same_parent(a, &pb) {
            return true;
        }
    }
    false
}

/// A split's leading block must look like a headline area: a `<header>`
/// element, a contained `h1`, or a header-flavored class/id.
fn has_header_signal(node: &NodeRef) -> bool {
    if dom::node_name(node).as_deref() == Some("header") {
        return true;
    }
    let sel = Selection::from(*node);
    if sel.select("h1").exists() {
        return true;
    }
    let class = dom::get_attribute(&sel, "class").unwrap_or_default();
    let id = dom::get_attribute(&sel, "id").unwrap_or_default();
    HEADER_HINT.is_match(&class) || HEADER_HINT.is_match(&id)
}
