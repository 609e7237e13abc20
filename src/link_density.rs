//! Link Density Testing
//!
//! Flags nodes dominated by anchor text. The measure multiplies the share of
//! words that sit inside links by the number of links, so a block made of a
//! single long link and a block made of many short links both score high.

use dom_query::Selection;

use crate::dom;

/// Link density above which a node counts as navigation/boilerplate.
pub const HIGH_LINK_DENSITY: f64 = 1.0;

/// Raw link statistics of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinkStats {
    /// Words in the node's full text.
    pub words: usize,
    /// Words across the text of all contained anchors.
    pub link_words: usize,
    /// Number of anchor descendants.
    pub links: usize,
}

impl LinkStats {
    /// `(link_words / words) * links`, or `0.0` when there is nothing to measure.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.links == 0 || self.words == 0 {
            return 0.0;
        }
        (self.link_words as f64 / self.words as f64) * self.links as f64
    }

    /// True when the score is strictly greater than [`HIGH_LINK_DENSITY`].
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.score() > HIGH_LINK_DENSITY
    }
}

/// Collect word and anchor counts for the first node of a selection.
#[must_use]
pub fn link_stats(element: &Selection) -> LinkStats {
    let links = element.select("a");
    let n_links = links.length();
    if n_links == 0 {
        return LinkStats::default();
    }

    let words = dom::text_content(element).split_whitespace().count();
    let link_text: String = links.iter().map(|link| dom::text_content(&link).to_string()).collect();
    let link_words = link_text.split_whitespace().count();

    LinkStats {
        words,
        link_words,
        links: n_links,
    }
}

/// Check whether a node is dominated by link text.
///
/// Nodes without anchors are never link-dense.
#[must_use]
pub fn is_high_link_density(element: &Selection) -> bool {
    link_stats(element).is_high()
}
