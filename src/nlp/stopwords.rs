//! Stopword sets
//!
//! Language lists come from the `stop-words` crate. Every entry is stored
//! lower-cased so lookups against normalized tokens need no allocation.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::{AnalysisError, Result};

/// Immutable-by-convention set of filler words excluded from frequency counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// English list from the `stop-words` crate
    pub fn english() -> Self {
        Self::from_language(LANGUAGE::English)
    }

    /// Look up a list by ISO code or English name.
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "none" | "" => return Ok(Self::empty()),
            other => {
                return Err(AnalysisError::InvalidConfig(format!(
                    "no stopword list for language \"{other}\""
                )))
            }
        };
        Ok(Self::from_language(lang))
    }

    /// No filtering at all
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build from a caller-supplied list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Add `words` to the set, lower-cased
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Drop `words` from the set, case-insensitively
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Number of stopwords in the set
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn from_language(lang: LANGUAGE) -> Self {
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}
