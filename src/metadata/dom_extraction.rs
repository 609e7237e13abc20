//! DOM-based Metadata Extraction
//!
//! Title cleanup and tag collection from the document body.

use std::collections::HashSet;

use dom_query::Document;

use crate::dom;
use crate::result::Metadata;

/// Title separators, tried in order. The first one present wins.
///
/// A hyphen is only a separator when surrounded by spaces, so hyphenated
/// words survive.
const TITLE_SEPARATORS: [(&str, &str); 4] = [("|", "|"), ("-", " - "), ("»", "»"), (":", ":")];

/// Selector for links that point at tag or topic listings.
const TAG_LINK_SELECTOR: &str =
    "a[rel=tag], a[href*='/tag/'], a[href*='/tags/'], a[href*='/topic/'], a[href*='?keyword']";

// ============================================================
// TITLE EXTRACTION
// ============================================================

/// Extract title from `<title>`, cutting away site-name decoration.
///
/// The title is split on the first separator that occurs in it and the
/// longest piece is kept.
#[must_use]
pub fn examine_title_element(doc: &Document) -> Option<String> {
    let title_elem = doc.select("title");
    if title_elem.is_empty() {
        return None;
    }

    let raw = dom::text_content(&title_elem.first()).to_string();

    let title = TITLE_SEPARATORS
        .iter()
        .find(|(probe, _)| raw.contains(probe))
        .map_or(raw.as_str(), |(_, separator)| longest_piece(&raw, separator));

    let title = title.replace("&raquo;", "»").replace("&#65533;", "");
    let title = title.trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Longest piece of `text` split on `separator`; the first one on ties.
fn longest_piece<'t>(text: &'t str, separator: &str) -> &'t str {
    text.split(separator).fold("", |best, piece| {
        if piece.len() > best.len() {
            piece
        } else {
            best
        }
    })
}

/// Fill `title` from the `<title>` element if still unset.
#[must_use]
pub fn extract_dom_title(doc: &Document, original: Metadata) -> Metadata {
    let mut result = original;
    if result.title.is_none() {
        result.title = examine_title_element(doc);
    }
    result
}

// ============================================================
// TAG EXTRACTION
// ============================================================

/// Collect tag names from `rel=tag` links and tag/topic listing links.
#[must_use]
pub fn extract_dom_tags(doc: &Document, original: Metadata) -> Metadata {
    let mut result = original;

    if result.tags.is_empty() {
        let tags = doc
            .select(TAG_LINK_SELECTOR)
            .iter()
            .map(|link| dom::text_content(&link).to_string())
            .collect();
        result.tags = clean_tags(tags);
    }

    result
}

/// Trim, drop empty entries and de-duplicate, keeping first occurrences.
fn clean_tags(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();

    items
        .into_iter()
        .map(|s| dom::normalize_spaces(&s))
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
