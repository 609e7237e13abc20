//! # content-gravity
//!
//! Main-content extraction by stop-word gravity scoring.
//!
//! Text-bearing elements (`<p>`, `<pre>`, `<td>`) are scored by how many stop
//! words they contain. Their scores flow up to parent and grandparent
//! containers, with a positional boost for early paragraphs and a penalty for
//! trailing ones. The container with the highest accumulated score is taken
//! as the article body, enriched with paragraphs stranded in its preceding
//! siblings and stripped of link-heavy or low-scoring children.
//!
//! ## Quick Start
//!
//! ```rust
//! use content_gravity::extract;
//!
//! let html = r#"<html><head><title>My Article | Example</title></head>
//! <body><div><p>This is the story of how it all began, and it is a long one.</p>
//! <p>It was the first time that they had been there at all.</p></div></body></html>"#;
//!
//! let result = extract(html)?;
//! println!("Title: {:?}", result.metadata.title);
//! println!("Content: {}", result.content_text);
//! # Ok::<(), content_gravity::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Gravity scoring**: stop-word density with boost and tail decay
//! - **Sibling recovery**: paragraphs outside the winning container are pulled back in
//! - **Post cleanup**: navigation blocks and stray widgets are pruned
//! - **Metadata**: title, declared language, favicon, description, keywords, domain, tags
//! - **Pluggable stop words**: any [`StopwordCounter`] can drive the scorer

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Gravity scoring pipeline (candidates, scoring, sibling recovery, cleanup).
pub mod extractor;

/// Link density testing for boilerplate detection.
pub mod link_density;

/// Metadata extraction (title, meta tags, tags).
pub mod metadata;

/// Stop-word counting.
pub mod stopwords;

/// URL utilities for domain extraction.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{is_language_code, Options, SiblingWalk, DEFAULT_LANGUAGE};
pub use result::{ExtractResult, Metadata};
pub use stopwords::{StopWords, StopwordCounter, WordStats};

/// Extracts main content from an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// Returns `Ok(ExtractResult)` on success. A page without qualifying content
/// is still a success, with empty content fields.
///
/// # Example
///
/// ```rust
/// use content_gravity::extract;
///
/// let html = "<html><body><nav>Home</nav></body></html>";
/// let result = extract(html)?;
/// assert!(result.content_html.is_none());
/// # Ok::<(), content_gravity::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Errors
///
/// Returns an `Error` when `options` fail [`Options::validate`].
///
/// # Example
///
/// ```rust
/// use content_gravity::{extract_with_options, Options};
///
/// let html = "<html><body><div><p>Es war einmal ein Mann, der in der Stadt lebte und nicht mehr wusste, was er wollte.</p></div></body></html>";
/// let options = Options {
///     target_language: Some("de".to_string()),
///     url: Some("https://example.com/story".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.language, "de");
/// assert_eq!(result.metadata.domain.as_deref(), Some("example.com"));
/// # Ok::<(), content_gravity::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options, &StopWords)
}

/// Extracts main content using a caller-supplied stop-word counter.
///
/// # Errors
///
/// Returns an `Error` when `options` fail [`Options::validate`].
///
/// # Example
///
/// ```rust
/// use content_gravity::{extract_with_counter, Options, WordStats};
///
/// // Treat every word as a stop word
/// let counter = |_: &str, text: &str| {
///     let n = text.split_whitespace().count();
///     WordStats { stop_word_count: n, word_count: n }
/// };
/// let html = "<div><p>alpha beta gamma delta</p></div>";
/// let result = extract_with_counter(html, &Options::default(), &counter)?;
/// assert_eq!(result.top_node_score, Some(4));
/// # Ok::<(), content_gravity::Error>(())
/// ```
pub fn extract_with_counter(html: &str, options: &Options, counter: &dyn StopwordCounter) -> Result<ExtractResult> {
    extract::extract_content(html, options, counter)
}
