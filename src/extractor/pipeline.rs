//! Content extraction pipeline.
//!
//! Orchestrates the scoring stages: candidate scoring, top node selection,
//! sibling recovery and post cleanup. Each stage reads and mutates the same
//! parsed document; scores live in a side overlay owned by the run.

use dom_query::Document;
use tracing::debug;

use crate::Options;

use super::pruning::post_cleanup;
use super::scoring::{score_candidates, select_top_node, TopNode};
use super::siblings::add_siblings;
use super::state::GravityScores;
use super::ScoringContext;

/// Score the document and pick the best node, without modifying the tree.
///
/// Returns the score overlay alongside the top node so later stages can
/// compare children against it. The top node is `None` when no candidate
/// qualified.
#[must_use]
pub fn calculate_best_node<'a>(doc: &'a Document, ctx: &ScoringContext) -> (GravityScores<'a>, Option<TopNode<'a>>) {
    let scores = score_candidates(doc, ctx);
    let top = select_top_node(&scores);

    match &top {
        Some(t) => debug!(score = t.score, scored = scores.len(), "top node selected"),
        None => debug!("no candidate qualified"),
    }

    (scores, top)
}

/// Full scoring pipeline: select the top node, then enrich and clean it.
///
/// Sibling recovery and post cleanup run in place on `doc` and can be
/// switched off through [`Options`].
#[must_use]
pub fn extract_top_node<'a>(doc: &'a Document, ctx: &ScoringContext, opts: &Options) -> Option<TopNode<'a>> {
    let (scores, top) = calculate_best_node(doc, ctx);
    let top = top?;

    if opts.recover_siblings {
        add_siblings(&top, ctx);
    }
    if opts.post_clean {
        post_cleanup(&top, &scores);
    }

    Some(top)
}
