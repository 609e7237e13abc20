//! Metadata extraction module.
//!
//! Runs beside content scoring on the same parsed document and fills the
//! descriptive fields of [`Metadata`]: title, declared language, favicon,
//! meta description and keywords, domain and tags.

pub mod dom_extraction;
pub mod meta_tags;

use dom_query::Document;
use tracing::debug;

use crate::result::Metadata;
use crate::url_utils;
use crate::Options;

pub use dom_extraction::{examine_title_element, extract_dom_tags, extract_dom_title};
pub use meta_tags::{examine_meta, extract_favicon, extract_meta_language, primary_language_subtag};

/// Extract all metadata from a document.
///
/// Must run before content scoring, which rewrites the tree in place.
#[must_use]
pub fn extract_metadata(doc: &Document, opts: &Options) -> Metadata {
    let mut metadata = Metadata {
        domain: opts.url.as_deref().and_then(url_utils::extract_hostname),
        ..Metadata::default()
    };

    metadata = meta_tags::examine_meta(doc, metadata);
    metadata = dom_extraction::extract_dom_title(doc, metadata);
    metadata = dom_extraction::extract_dom_tags(doc, metadata);

    debug!(
        title = ?metadata.title,
        language = ?metadata.meta_language,
        tags = metadata.tags.len(),
        "metadata extracted"
    );

    metadata
}
