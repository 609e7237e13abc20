//! Configuration options for content extraction.
//!
//! The `Options` struct controls which language drives stop-word counting and
//! which of the optional pipeline stages run.

use crate::error::{Error, Result};

/// Language used when neither the caller nor the document declares one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Order in which a candidate's element siblings are scanned when deciding
/// whether the candidate is boostable.
///
/// The scan stops after three paragraph siblings whichever order is used, so
/// the order decides *which* three paragraphs get a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiblingWalk {
    /// All element siblings from the first child of the parent to the last,
    /// skipping the candidate itself.
    #[default]
    DocumentOrder,
    /// Preceding siblings nearest first, then following siblings nearest first.
    PrecedingFirst,
    /// Following siblings nearest first, then preceding siblings nearest first.
    FollowingFirst,
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use content_gravity::Options;
///
/// let options = Options {
///     target_language: Some("de".to_string()),
///     post_clean: false,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Language (ISO 639-1) used for stop-word counting.
    ///
    /// When `None`, the language declared by the document is used, falling
    /// back to [`DEFAULT_LANGUAGE`].
    ///
    /// Default: `None`
    pub target_language: Option<String>,

    /// Final resolved URL of the document, used for the domain field.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Sibling scan order for the boostability test.
    ///
    /// Default: [`SiblingWalk::DocumentOrder`]
    pub sibling_walk: SiblingWalk,

    /// Re-attach qualifying paragraphs found in the top node's preceding siblings.
    ///
    /// Default: `true`
    pub recover_siblings: bool,

    /// Prune link-heavy, paragraph-less and low-scoring children of the top node.
    ///
    /// Default: `true`
    pub post_clean: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target_language: None,
            url: None,
            sibling_walk: SiblingWalk::default(),
            recover_siblings: true,
            post_clean: true,
        }
    }
}

impl Options {
    /// Check caller-supplied values before any document is touched.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref language) = self.target_language {
            if !is_language_code(language) {
                return Err(Error::InvalidLanguage(language.clone()));
            }
        }

        if let Some(ref url) = self.url {
            if let Err(err) = url::Url::parse(url) {
                return Err(Error::InvalidUrl(format!("{url}: {err}")));
            }
        }

        Ok(())
    }
}

/// Returns true for exactly two ASCII letters.
#[must_use]
pub fn is_language_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}
