//! Stop-word counting.
//!
//! Word density is the primary relevance signal of the scorer: a block of
//! real prose contains many function words ("the", "and", "of"), while menus,
//! bylines and captions contain few. The scorer only needs a count, so the
//! provider sits behind the [`StopwordCounter`] trait and can be swapped out.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use stop_words::{get, LANGUAGE};

/// Anything that is not a letter, digit, connector or whitespace.
#[allow(clippy::expect_used)]
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Ll}\p{Lu}\p{Lt}\p{Lo}\p{Nd}\p{Pc}\s]").expect("PUNCTUATION regex")
});

/// Stop-word lists keyed by ISO 639-1 code, loaded once per process.
static STOPLISTS: LazyLock<HashMap<&'static str, HashSet<String>>> = LazyLock::new(|| {
    [
        ("ar", LANGUAGE::Arabic),
        ("da", LANGUAGE::Danish),
        ("de", LANGUAGE::German),
        ("en", LANGUAGE::English),
        ("es", LANGUAGE::Spanish),
        ("fi", LANGUAGE::Finnish),
        ("fr", LANGUAGE::French),
        ("hu", LANGUAGE::Hungarian),
        ("it", LANGUAGE::Italian),
        ("nl", LANGUAGE::Dutch),
        ("no", LANGUAGE::Norwegian),
        ("pl", LANGUAGE::Polish),
        ("pt", LANGUAGE::Portuguese),
        ("ru", LANGUAGE::Russian),
        ("sv", LANGUAGE::Swedish),
        ("tr", LANGUAGE::Turkish),
    ]
    .into_iter()
    .map(|(code, lang)| {
        let words = get(lang).iter().map(|s| s.to_lowercase()).collect();
        (code, words)
    })
    .collect()
});

/// Word statistics for one block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Number of words found in the language's stop-word list.
    pub stop_word_count: usize,
    /// Number of whitespace-separated words after punctuation removal.
    pub word_count: usize,
}

/// Counts stop words in a block of text for a given language.
///
/// Implementations must be pure: empty text yields zero counts and an
/// unknown language must not panic.
pub trait StopwordCounter {
    /// Measure `text` against the stop-word list for `language`.
    fn count(&self, language: &str, text: &str) -> WordStats;
}

impl<F> StopwordCounter for F
where
    F: Fn(&str, &str) -> WordStats,
{
    fn count(&self, language: &str, text: &str) -> WordStats {
        self(language, text)
    }
}

/// Default provider backed by the `stop-words` crate.
///
/// Unknown language codes fall back to the English list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWords;

impl StopWords {
    /// Languages with a bundled list.
    #[must_use]
    pub fn supported_languages() -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = STOPLISTS.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    fn stoplist(language: &str) -> Option<&'static HashSet<String>> {
        let code = language.to_ascii_lowercase();
        STOPLISTS
            .get(code.as_str())
            .or_else(|| STOPLISTS.get(crate::options::DEFAULT_LANGUAGE))
    }
}

impl StopwordCounter for StopWords {
    fn count(&self, language: &str, text: &str) -> WordStats {
        if text.trim().is_empty() {
            return WordStats::default();
        }

        let stripped = PUNCTUATION.replace_all(text, "");
        let Some(stoplist) = Self::stoplist(language) else {
            return WordStats::default();
        };

        let mut stats = WordStats::default();
        for word in stripped.split_whitespace() {
            stats.word_count += 1;
            if stoplist.contains(&word.to_lowercase()) {
                stats.stop_word_count += 1;
            }
        }
        stats
    }
}
