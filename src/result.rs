//! Result types for extraction output.
//!
//! This module defines the structured output from content extraction,
//! including the main content and associated metadata.

use serde::Serialize;

/// Result of content extraction from an HTML document.
///
/// A page without any qualifying candidate still yields a result: content
/// fields are empty and `top_node_score` is `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractResult {
    /// Main content as plain text, one block per child element of the top
    /// node separated by blank lines.
    pub content_text: String,

    /// Outer HTML of the cleaned top node.
    pub content_html: Option<String>,

    /// Gravity score of the selected top node.
    pub top_node_score: Option<i64>,

    /// Language used for stop-word counting (ISO 639-1).
    pub language: String,

    /// Extracted metadata about the document.
    pub metadata: Metadata,
}

/// Metadata extracted from an HTML document.
///
/// All fields are optional as metadata may not be present in all documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Cleaned `<title>` text.
    pub title: Option<String>,

    /// Language declared by the document (ISO 639-1 code).
    pub meta_language: Option<String>,

    /// Favicon URL as written in the document.
    pub favicon: Option<String>,

    /// `<meta name="description">` content.
    pub meta_description: Option<String>,

    /// `<meta name="keywords">` content.
    pub meta_keywords: Option<String>,

    /// Hostname of the document URL.
    pub domain: Option<String>,

    /// Content tags.
    pub tags: Vec<String>,
}
