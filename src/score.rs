//! Content density scoring.
//!
//! Scores are computed bottom-up in a single post-order pass: a node's own
//! contribution comes from its direct (non-descendant) text, discounted by
//! the link density of its subtree and weighted by its tag; descendant
//! contributions arrive through `child_score_sum`, dampened once per level
//! so a root wrapper can never win by mere aggregation. Scores are a pure
//! function of the current tree and are never cached across trees.

use crate::config::Config;
use crate::dom::{self, NodeRef};
use crate::patterns::{normalize_whitespace, CONTAINER_TAGS};

/// Density score for a single node, recomputed bottom-up per extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    /// Character count of the node's direct (non-descendant) text.
    pub text_length: usize,
    /// Anchor text characters divided by total subtree text, in [0, 1].
    /// Zero-length text gives zero, never a divide-by-zero fault.
    pub link_density: f64,
    /// Fixed per-tag bonus/penalty from the configuration table.
    pub tag_weight: i32,
    /// Sum of the children's total scores, before dampening.
    pub child_score_sum: f64,
    /// `text_length × (1 − link_density) × weight_multiplier(tag_weight)
    /// + child_score_sum × dampening_factor`.
    pub total_score: f64,
}

/// A scored container candidate recorded during the selector DFS.
#[derive(Debug, Clone)]
pub(crate) struct ScoredNode<'a> {
    pub node: NodeRef<'a>,
    pub score: CandidateScore,
    /// Element depth below the traversal root.
    pub depth: usize,
    /// Pre-order position, the document-order tie-break key.
    pub order: usize,
}

/// Subtree aggregates carried up the post-order walk.
struct SubtreeStats {
    total_score: f64,
    text_len: usize,
    link_len: usize,
}

/// Turn a signed tag weight into a multiplier on the node's own text
/// contribution. Weight +8 (`article`, `main`) multiplies by 1.8; weight
/// −8 (`aside`, `nav`, `footer`) multiplies by 0.2; neutral tags by 1.0.
/// The multiplier never goes negative.
#[must_use]
pub fn weight_multiplier(weight: i32) -> f64 {
    (1.0 + f64::from(weight) * 0.1).max(0.0)
}

/// Score a single node as a pure function of its current subtree.
#[must_use]
pub fn score(node: &NodeRef, config: &Config) -> CandidateScore {
    let mut counter = 0;
    let mut sink = Vec::new();
    analyze(*node, 0, &mut counter, &mut sink, config).1
}

/// Score every node under `root` in one pass, collecting block-level
/// containers whose total score reaches the minimum content threshold.
/// The comparison is inclusive: scoring exactly at the threshold makes
/// a candidate.
pub(crate) fn score_tree<'a>(root: NodeRef<'a>, config: &Config) -> Vec<ScoredNode<'a>> {
    let mut counter = 0;
    let mut candidates = Vec::new();
    analyze(root, 0, &mut counter, &mut candidates, config);
    candidates
}

fn analyze<'a>(
    node: NodeRef<'a>,
    depth: usize,
    counter: &mut usize,
    candidates: &mut Vec<ScoredNode<'a>>,
    config: &Config,
) -> (SubtreeStats, CandidateScore) {
    *counter += 1;
    let order = *counter;

    let mut direct_text = 0usize;
    let mut child_score_sum = 0.0f64;
    let mut text_len = 0usize;
    let mut link_len = 0usize;

    for child in node.children() {
        if child.is_text() {
            direct_text += normalize_whitespace(&child.text()).chars().count();
        } else if child.is_element() {
            let child_tag = dom::node_name(&child).unwrap_or_default();
            let (stats, _) = analyze(child, depth + 1, counter, candidates, config);
            child_score_sum += stats.total_score;
            text_len += stats.text_len;
            // Everything under an anchor counts as link text for ancestors.
            link_len += if child_tag == "a" { stats.text_len } else { stats.link_len };
        }
    }
    text_len += direct_text;

    let link_density = if text_len == 0 {
        0.0
    } else {
        (link_len as f64 / text_len as f64).min(1.0)
    };

    let tag = dom::node_name(&node).unwrap_or_default();
    let tag_weight = config.tag_weight(&tag);
    let total_score = direct_text as f64 * (1.0 - link_density) * weight_multiplier(tag_weight)
        + child_score_sum * config.dampening_factor;

    let score = CandidateScore {
        text_length: direct_text,
        link_density,
        tag_weight,
        child_score_sum,
        total_score,
    };

    if CONTAINER_TAGS.contains(&tag.as_str()) && total_score >= config.min_content_score {
        candidates.push(ScoredNode {
            node,
            score: score.clone(),
            depth,
            order,
        });
    }

    (
        SubtreeStats {
            total_score,
            text_len,
            link_len,
        },
        score,
    )
}
