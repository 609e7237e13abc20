//! Candidate scoring and top node selection.
//!
//! Every qualifying candidate pushes its stop-word count, adjusted by a
//! positional boost, into its parent (full weight) and grandparent (half
//! weight). The highest-scoring receiver becomes the top node.

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::link_density::is_high_link_density;

use super::candidates::nodes_to_check;
use super::state::GravityScores;
use super::ScoringContext;

/// A candidate needs more than this many stop words to be scored.
pub const MIN_CANDIDATE_STOP_WORDS: usize = 2;

/// A paragraph sibling needs more than this many stop words to make a candidate boostable.
pub const MIN_BOOSTING_SIBLING_STOP_WORDS: usize = 5;

/// Paragraph siblings examined before the boostability scan gives up.
pub const MAX_BOOSTING_SIBLING_STEPS: usize = 3;

const BOOST_NUMERATOR: f64 = 50.0;
const TAIL_DECAY_MIN_CANDIDATES: usize = 15;
const TAIL_FRACTION: f64 = 0.25;
const MAX_NEGATIVE_SCORING: f64 = 40.0;
const NEGATIVE_SCORING_FLOOR: f64 = 5.0;

/// Running state of the boost/decay schedule over one candidate sequence.
///
/// Boosts shrink as `50 / k` for the k-th boostable candidate. When there are
/// more than 15 candidates, the last quarter receives a quadratic penalty
/// instead, replaced by a flat `+5` once the accumulated penalty would pass 40.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostSchedule {
    starting_boost: f64,
    negative_scoring: f64,
    total: usize,
}

impl BoostSchedule {
    /// Schedule for a sequence of `total` qualifying candidates.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            starting_boost: 1.0,
            negative_scoring: 0.0,
            total,
        }
    }

    /// Boost for the candidate at `index` (0-based).
    pub fn next(&mut self, index: usize, boostable: bool) -> f64 {
        let mut boost_score = 0.0;

        if boostable {
            boost_score = BOOST_NUMERATOR / self.starting_boost;
            self.starting_boost += 1.0;
        }

        if self.total > TAIL_DECAY_MIN_CANDIDATES {
            let bottom = self.total as f64 * TAIL_FRACTION;
            let remaining = self.total.saturating_sub(index) as f64;
            if remaining <= bottom {
                let booster = bottom - remaining;
                let decay = booster.powi(2);
                if decay + self.negative_scoring > MAX_NEGATIVE_SCORING {
                    boost_score = NEGATIVE_SCORING_FLOOR;
                } else {
                    boost_score = -decay;
                    self.negative_scoring += decay;
                }
            }
        }

        boost_score
    }
}

/// Score contribution of a candidate: stop words plus the boost truncated toward zero.
#[must_use]
pub fn up_score(stop_words: usize, boost_score: f64) -> i64 {
    stop_words as i64 + boost_score.trunc() as i64
}

/// Whether a candidate sits next to a substantial paragraph.
///
/// Scans element siblings in the configured order. Only `<p>` siblings count
/// as steps; the first one with more than five stop words wins, and the scan
/// stops once three paragraph siblings were examined without a match.
#[must_use]
pub fn is_boostable(node: &NodeRef, ctx: &ScoringContext) -> bool {
    let mut steps_away = 0;

    for sibling in dom::element_siblings(node, ctx.sibling_walk) {
        if !dom::has_tag(&sibling, "p") {
            continue;
        }
        if steps_away >= MAX_BOOSTING_SIBLING_STEPS {
            return false;
        }
        if ctx.stop_word_count(&dom::node_text(&sibling)) > MIN_BOOSTING_SIBLING_STOP_WORDS {
            return true;
        }
        steps_away += 1;
    }

    false
}

/// Candidates with enough stop words and no link domination, with their counts.
#[must_use]
pub fn qualifying_candidates<'a>(doc: &'a Document, ctx: &ScoringContext) -> Vec<(NodeRef<'a>, usize)> {
    nodes_to_check(doc)
        .into_iter()
        .filter_map(|node| {
            let sel = Selection::from(node);
            let stop_words = ctx.stop_word_count(&dom::text_content(&sel));
            (stop_words > MIN_CANDIDATE_STOP_WORDS && !is_high_link_density(&sel))
                .then_some((node, stop_words))
        })
        .collect()
}

/// Score every qualifying candidate into its parent and grandparent.
#[must_use]
pub fn score_candidates<'a>(doc: &'a Document, ctx: &ScoringContext) -> GravityScores<'a> {
    let candidates = qualifying_candidates(doc, ctx);
    let mut schedule = BoostSchedule::new(candidates.len());
    let mut scores = GravityScores::new();

    debug!(candidates = candidates.len(), "scoring candidates");

    for (index, (node, stop_words)) in candidates.iter().enumerate() {
        let boost_score = schedule.next(index, is_boostable(node, ctx));
        let up = up_score(*stop_words, boost_score);

        let Some(parent) = dom::parent_element(node) else {
            continue;
        };
        scores.update(&parent, up);

        if let Some(grandparent) = dom::parent_element(&parent) {
            scores.update(&grandparent, up / 2);
        }
    }

    scores
}

/// The selected article container and its gravity score.
#[derive(Clone, Copy)]
pub struct TopNode<'a> {
    /// Selected node.
    pub node: NodeRef<'a>,
    /// Its accumulated gravity score.
    pub score: i64,
}

impl<'a> TopNode<'a> {
    /// Selection wrapping the top node.
    #[must_use]
    pub fn selection(&self) -> Selection<'a> {
        Selection::from(self.node)
    }
}

/// Highest-scoring node among those that received a contribution.
///
/// On equal scores the later node wins. `None` when nothing was scored.
#[must_use]
pub fn select_top_node<'a>(scores: &GravityScores<'a>) -> Option<TopNode<'a>> {
    let mut top: Option<TopNode<'a>> = None;

    for node in scores.parent_nodes() {
        let score = scores.score(node.id);
        if top.is_none_or(|t| score >= t.score) {
            top = Some(TopNode { node: *node, score });
        }
    }

    top
}
