//! Top-level extraction flow.
//!
//! Parses the HTML, reads metadata while the tree is still intact, picks the
//! scoring language, then runs the gravity pipeline and renders the winning
//! node as HTML and plain text.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::Result;
use crate::extractor::{self, ScoringContext};
use crate::metadata;
use crate::options::{Options, DEFAULT_LANGUAGE};
use crate::result::{ExtractResult, Metadata};
use crate::stopwords::StopwordCounter;

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options, counter: &dyn StopwordCounter) -> Result<ExtractResult> {
    options.validate()?;

    let document = Document::from(html);

    // Metadata first: sibling recovery and cleanup rewrite the tree
    let metadata = metadata::extract_metadata(&document, options);
    let language = scoring_language(options, &metadata);

    debug!(html_len = html.len(), language = %language, "starting extraction");

    let ctx = ScoringContext::new(counter, &language, options.sibling_walk);
    let top = extractor::extract_top_node(&document, &ctx, options);

    let (content_text, content_html, top_node_score) = match top {
        Some(top) => {
            let sel = top.selection();
            (
                block_text(&sel),
                Some(dom::outer_html(&sel).to_string()),
                Some(top.score),
            )
        }
        None => (String::new(), None, None),
    };

    Ok(ExtractResult {
        content_text,
        content_html,
        top_node_score,
        language,
        metadata,
    })
}

/// Caller's language, else the document's, else the default.
fn scoring_language(options: &Options, metadata: &Metadata) -> String {
    options
        .target_language
        .as_deref()
        .map(str::to_ascii_lowercase)
        .or_else(|| metadata.meta_language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Plain text of a node: one block per child element, blank line between.
///
/// Falls back to the node's whole text when it has no element children.
fn block_text(sel: &Selection) -> String {
    let blocks: Vec<String> = sel
        .children()
        .iter()
        .map(|child| dom::normalize_spaces(&dom::text_content(&child)))
        .filter(|text| !text.is_empty())
        .collect();

    if blocks.is_empty() {
        dom::normalize_spaces(&dom::text_content(sel))
    } else {
        blocks.join("\n\n")
    }
}
