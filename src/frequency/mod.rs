//! Word-frequency analysis
//!
//! Turns one text field of the whole corpus into ranked word counts:
//!
//! 1. join the field values in record order (a single space between records)
//! 2. lower-case and collapse non-word runs ([`crate::nlp::tokenizer`])
//! 3. drop stopwords and single-character tokens
//! 4. count, rank by count descending, ties in first-seen order
//!
//! Records are tokenized one at a time rather than joined into a single
//! string. The joining space is itself a separator, so the token stream is
//! identical either way.

pub mod cloud;
pub mod counter;

use serde::Serialize;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{normalize, split_tokens};
use crate::types::{Corpus, TextField};

pub use cloud::{CloudWord, WordCloudWeights};
pub use counter::FrequencyCounter;

/// Number of words shown in the frequency bar chart
pub const DEFAULT_TOP_K: usize = 10;

/// A word and how many times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Ranked word counts for one field, at most `k` long
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequencyTable {
    pub field: TextField,
    pub entries: Vec<WordCount>,
}

impl WordFrequencyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as borrowed `(word, count)` pairs
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect()
    }
}

/// Counts meaningful words in a corpus field
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyAnalyzer {
    stopwords: StopwordFilter,
}

impl WordFrequencyAnalyzer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Whether a normalized token survives filtering
    fn qualifies(&self, token: &str) -> bool {
        let mut chars = token.chars();
        let single_char = chars.next().is_some() && chars.next().is_none();
        !single_char && !self.stopwords.is_stopword(token)
    }

    /// Count every qualifying token of `field` across the corpus.
    pub fn count_words(&self, corpus: &Corpus, field: TextField) -> FrequencyCounter {
        let mut counter = FrequencyCounter::new();
        for value in corpus.values(field) {
            let normalized = normalize(value);
            for token in split_tokens(&normalized).filter(|t| self.qualifies(t)) {
                counter.add(token);
            }
        }
        tracing::debug!(
            field = field.as_str(),
            distinct = counter.distinct(),
            total = counter.total(),
            "counted words"
        );
        counter
    }

    /// The `k` most frequent qualifying words of `field`.
    ///
    /// Returns fewer than `k` entries when the vocabulary is smaller, and an
    /// empty table for `k == 0` or an empty corpus.
    #[tracing::instrument(skip_all, fields(field = field.as_str(), k = k))]
    pub fn top_words(&self, corpus: &Corpus, field: TextField, k: usize) -> WordFrequencyTable {
        let entries = if k == 0 {
            Vec::new()
        } else {
            self.count_words(corpus, field)
                .into_ranked()
                .into_iter()
                .take(k)
                .map(|(word, count)| WordCount { word, count })
                .collect()
        };
        WordFrequencyTable { field, entries }
    }
}
