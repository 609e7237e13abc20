//! Error types for content-gravity.
//!
//! Extraction itself never fails: a document without usable candidates simply
//! yields no top node. Errors are only raised while validating caller options.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested target language is not a two-letter ISO 639-1 code.
    #[error("invalid target language: {0:?}")]
    InvalidLanguage(String),

    /// The document URL supplied in the options could not be parsed.
    #[error("invalid document URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
