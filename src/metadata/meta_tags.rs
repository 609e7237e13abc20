//! HTML Meta Tag Extraction
//!
//! Reads the document head: `<meta>` description and keywords, the declared
//! language and the favicon link.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::is_language_code;
use crate::result::Metadata;

/// Examine the document head for metadata.
///
/// Only fields still unset on `original` are filled, first match wins.
#[must_use]
pub fn examine_meta(doc: &Document, original: Metadata) -> Metadata {
    let mut result = original;

    for node in doc.select("meta[name]").nodes() {
        let meta = Selection::from(*node);

        let name = dom::get_attribute(&meta, "name").unwrap_or_default().to_lowercase();
        let content = dom::get_attribute(&meta, "content").unwrap_or_default();

        if content.trim().is_empty() {
            continue;
        }

        match name.as_str() {
            "description" => {
                if result.meta_description.is_none() {
                    result.meta_description = Some(content.trim().to_string());
                }
            }
            "keywords" => {
                if result.meta_keywords.is_none() {
                    result.meta_keywords = Some(content.trim().to_string());
                }
            }
            _ => {}
        }
    }

    if result.meta_language.is_none() {
        result.meta_language = extract_meta_language(doc);
    }

    if result.favicon.is_none() {
        result.favicon = extract_favicon(doc);
    }

    result
}

/// Declared document language as an ISO 639-1 code.
///
/// `<html lang>` wins over `<meta http-equiv="content-language">`. Region
/// subtags are dropped; anything that is not two letters is ignored.
#[must_use]
pub fn extract_meta_language(doc: &Document) -> Option<String> {
    let declared = dom::get_attribute(&doc.select("html[lang]"), "lang").or_else(|| {
        doc.select("meta[http-equiv]")
            .iter()
            .find(|meta| {
                dom::get_attribute(meta, "http-equiv")
                    .is_some_and(|v| v.eq_ignore_ascii_case("content-language"))
            })
            .and_then(|meta| dom::get_attribute(&meta, "content"))
    })?;

    primary_language_subtag(&declared)
}

/// Lowercased primary subtag of a language tag such as `en-US` or `pt_BR`.
#[must_use]
pub fn primary_language_subtag(tag: &str) -> Option<String> {
    let primary = tag.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    is_language_code(&primary).then_some(primary)
}

/// `href` of the first `<link>` whose `rel` mentions an icon.
#[must_use]
pub fn extract_favicon(doc: &Document) -> Option<String> {
    doc.select("link[rel]")
        .iter()
        .find(|link| {
            dom::get_attribute(link, "rel").is_some_and(|rel| rel.to_lowercase().contains("icon"))
        })
        .and_then(|link| dom::get_attribute(&link, "href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
