//! URL Utility Functions
//!
//! Domain extraction from the document's final URL.

use url::Url;

/// Check if a string is a valid absolute `http(s)` URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Extract the hostname (domain) from a URL.
///
/// `None` for empty, relative or unparseable input.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let (_, parsed) = is_absolute_url(url_str);

    parsed
        .and_then(|url| url.host_str().map(str::to_lowercase))
        .filter(|host| !host.is_empty())
}
