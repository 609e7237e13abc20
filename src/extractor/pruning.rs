//! Post-selection cleanup.
//!
//! Once the top node is chosen (and sibling paragraphs merged in), its direct
//! children are checked one by one. Paragraphs always stay. Anything else
//! goes if it is link-heavy, if it holds no real paragraph, or if it carries
//! too little of the top node's score.

use dom_query::{NodeRef, Selection};
use tracing::{debug, trace};

use crate::dom;
use crate::link_density::is_high_link_density;

use super::scoring::TopNode;
use super::state::GravityScores;

/// Paragraphs shorter than this (in characters) do not count as paragraphs.
pub const MIN_PARAGRAPH_CHARS: usize = 25;

/// A child must carry this share of the top node's score.
pub const SCORE_THRESHOLD_RATIO: f64 = 0.08;

/// Why a child of the top node was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneReason {
    /// Dominated by link text.
    HighLinkDensity,
    /// No paragraph of useful length left inside.
    NoParagraphs,
    /// Score below the relevance threshold.
    BelowThreshold,
}

/// Drop short paragraphs inside `sel`, then report whether none remain.
///
/// Table cells never count as paragraph-less. The short paragraphs are
/// removed even when the answer is `false`.
pub fn is_table_and_no_para_exist(sel: &Selection) -> bool {
    let short: Vec<NodeRef> = sel
        .select("p")
        .nodes()
        .iter()
        .filter(|p| dom::node_text(p).chars().count() < MIN_PARAGRAPH_CHARS)
        .copied()
        .collect();

    for p in &short {
        dom::remove_node(p);
    }

    sel.select("p").is_empty() && dom::tag_name(sel).as_deref() != Some("td")
}

/// Whether `child` carries at least 8% of the top node's score.
///
/// Table cells always pass.
#[must_use]
pub fn is_node_score_threshold_met(top_score: i64, child: &NodeRef, scores: &GravityScores) -> bool {
    let threshold = top_score as f64 * SCORE_THRESHOLD_RATIO;
    let child_score = scores.score(child.id) as f64;

    !(child_score < threshold && !dom::has_tag(child, "td"))
}

/// First rule a non-paragraph child fails, checked in order.
fn prune_reason(child: &NodeRef, top_score: i64, scores: &GravityScores) -> Option<PruneReason> {
    let sel = Selection::from(*child);

    if is_high_link_density(&sel) {
        Some(PruneReason::HighLinkDensity)
    } else if is_table_and_no_para_exist(&sel) {
        Some(PruneReason::NoParagraphs)
    } else if !is_node_score_threshold_met(top_score, child, scores) {
        Some(PruneReason::BelowThreshold)
    } else {
        None
    }
}

/// Remove failing children of the top node. Returns how many were removed.
pub fn post_cleanup(top: &TopNode, scores: &GravityScores) -> usize {
    let top_score = scores.score(top.node.id);

    // Decide for every child first, then detach.
    let doomed: Vec<NodeRef> = dom::element_children(&top.node)
        .into_iter()
        .filter(|child| !dom::has_tag(child, "p"))
        .filter(|child| match prune_reason(child, top_score, scores) {
            Some(reason) => {
                trace!(tag = ?dom::node_tag(child), ?reason, "pruning child");
                true
            }
            None => false,
        })
        .collect();

    for child in &doomed {
        dom::remove_node(child);
    }

    debug!(pruned = doomed.len(), "post cleanup");
    doomed.len()
}
