//! Candidate enumeration.
//!
//! Text-bearing nodes (paragraphs, preformatted blocks and table cells) in
//! document order. Position in this sequence drives the tail decay of the
//! scorer, so the order must not be disturbed.

use dom_query::{Document, NodeRef};

/// Tags that can carry article text.
pub const CANDIDATE_TAGS: &[&str] = &["p", "pre", "td"];

/// Combined selector for [`CANDIDATE_TAGS`]. One query keeps document order.
const CANDIDATE_SELECTOR: &str = "p, pre, td";

/// All candidate nodes of a document, in document order.
#[must_use]
pub fn nodes_to_check(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select(CANDIDATE_SELECTOR).nodes().to_vec()
}
