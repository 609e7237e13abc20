//! Sibling recovery.
//!
//! Inconsistent wrapper markup often leaves the first paragraphs of an
//! article outside the container that wins scoring. This stage walks the top
//! node's preceding siblings and copies their qualifying paragraphs to the
//! front of the top node, keeping document order.

use dom_query::{NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::link_density::is_high_link_density;

use super::scoring::{TopNode, MIN_CANDIDATE_STOP_WORDS};
use super::ScoringContext;

/// Baseline used when the top node holds no measurable paragraph.
pub const DEFAULT_SIBLING_BASELINE: usize = 100_000;

/// Share of the baseline a sibling paragraph must exceed.
pub const SIBLING_BASELINE_RATIO: f64 = 0.30;

/// Average stop-word count of the top node's qualifying paragraphs.
///
/// Integer average; [`DEFAULT_SIBLING_BASELINE`] when none qualifies.
#[must_use]
pub fn siblings_baseline_score(top: &Selection, ctx: &ScoringContext) -> usize {
    let mut paragraphs = 0;
    let mut total = 0;

    for p in top.select("p").iter() {
        let stop_words = ctx.stop_word_count(&dom::text_content(&p));
        if stop_words > MIN_CANDIDATE_STOP_WORDS && !is_high_link_density(&p) {
            paragraphs += 1;
            total += stop_words;
        }
    }

    if paragraphs == 0 {
        DEFAULT_SIBLING_BASELINE
    } else {
        total / paragraphs
    }
}

/// Paragraph HTML worth recovering from one sibling, in document order.
///
/// A non-empty `<p>` sibling is taken as is. Otherwise each descendant
/// paragraph beating `0.30 * baseline` without link domination is rebuilt as
/// a plain-text `<p>`, dropping its inline markup.
#[must_use]
pub fn siblings_content(sibling: &NodeRef, baseline: usize, ctx: &ScoringContext) -> Vec<String> {
    let sel = Selection::from(*sibling);

    if dom::has_tag(sibling, "p") && !dom::text_content(&sel).is_empty() {
        return vec![dom::outer_html(&sel).to_string()];
    }

    let threshold = SIBLING_BASELINE_RATIO * baseline as f64;
    let mut out = Vec::new();

    for p in sel.select("p").iter() {
        let text = dom::text_content(&p);
        if text.trim().is_empty() {
            continue;
        }
        let stop_words = ctx.stop_word_count(&text);
        if threshold < stop_words as f64 && !is_high_link_density(&p) {
            out.push(format!("<p>{}</p>", dom::escape_text(&dom::normalize_spaces(&text))));
        }
    }

    out
}

/// Copy qualifying paragraphs from the top node's preceding siblings into it.
///
/// Siblings are visited nearest first and each batch is prepended ahead of
/// the previous one, so the merged children read in document order.
/// Returns the number of paragraphs recovered.
pub fn add_siblings(top: &TopNode, ctx: &ScoringContext) -> usize {
    let top_sel = top.selection();
    let baseline = siblings_baseline_score(&top_sel, ctx);

    // Collect everything before touching the tree.
    let batches: Vec<Vec<String>> = dom::preceding_element_siblings(&top.node)
        .iter()
        .map(|sibling| siblings_content(sibling, baseline, ctx))
        .filter(|batch| !batch.is_empty())
        .collect();

    let mut recovered = 0;
    for batch in &batches {
        recovered += batch.len();
        dom::prepend_html(&top_sel, &batch.concat());
    }

    debug!(baseline, recovered, "sibling recovery");
    recovered
}
