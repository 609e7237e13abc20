//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `candidates`: text-bearing candidate enumeration
//! - `state`: per-run gravity score overlay
//! - `scoring`: boost/decay scoring and top node selection
//! - `siblings`: recovery of paragraphs stranded in preceding siblings
//! - `pruning`: post-selection cleanup of the top node's children
//! - `pipeline`: orchestration of the stages above
//!
//! # Usage
//!
//! ```rust
//! use content_gravity::dom;
//! use content_gravity::extractor::{pipeline, ScoringContext};
//! use content_gravity::{Options, StopWords};
//!
//! let html = "<div><p>This is the story of how it all began, and it is long.</p></div>";
//! let doc = dom::parse(html);
//! let counter = StopWords;
//! let ctx = ScoringContext::new(&counter, "en", Default::default());
//!
//! if let Some(top) = pipeline::extract_top_node(&doc, &ctx, &Options::default()) {
//!     println!("{}", top.selection().text());
//! }
//! ```

pub mod candidates;
pub mod pipeline;
pub mod pruning;
pub mod scoring;
pub mod siblings;
pub mod state;

pub use pipeline::{calculate_best_node, extract_top_node};
pub use scoring::TopNode;
pub use state::{GravityScore, GravityScores};

use crate::options::SiblingWalk;
use crate::stopwords::StopwordCounter;

/// Everything the scoring stages need besides the document.
///
/// Holds no mutable state, so one context can serve many documents in
/// parallel as long as the counter can.
#[derive(Clone, Copy)]
pub struct ScoringContext<'c> {
    /// Stop-word provider.
    pub counter: &'c dyn StopwordCounter,
    /// Language passed to the provider.
    pub language: &'c str,
    /// Sibling order for the boostability test.
    pub sibling_walk: SiblingWalk,
}

impl<'c> ScoringContext<'c> {
    /// Build a context.
    #[must_use]
    pub fn new(counter: &'c dyn StopwordCounter, language: &'c str, sibling_walk: SiblingWalk) -> Self {
        Self {
            counter,
            language,
            sibling_walk,
        }
    }

    /// Stop-word count of `text` in the context language.
    #[inline]
    #[must_use]
    pub fn stop_word_count(&self, text: &str) -> usize {
        self.counter.count(self.language, text).stop_word_count
    }
}
