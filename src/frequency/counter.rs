//! Insertion-ordered word counter
//!
//! Words are interned to dense IDs in the order they are first seen. Counts
//! live in a parallel vector, so a stable sort on count keeps first-seen
//! order among ties without consulting hash order.

use rustc_hash::FxHashMap;

/// Word counts keyed by interned first-seen IDs
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    ids: FxHashMap<String, usize>,
    words: Vec<String>,
    counts: Vec<usize>,
    total: usize,
}

impl FrequencyCounter {
    /// Empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        let id = match self.ids.get(word) {
            Some(&id) => id,
            None => {
                let id = self.words.len();
                self.ids.insert(word.to_string(), id);
                self.words.push(word.to_string());
                self.counts.push(0);
                id
            }
        };
        self.counts[id] += 1;
        self.total += 1;
    }

    /// Occurrences of `word`, zero if never seen
    pub fn count(&self, word: &str) -> usize {
        self.ids
            .get(word)
            .map(|&id| self.counts[id])
            .unwrap_or(0)
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.words.len()
    }

    /// Total words counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Consume the counter, returning `(word, count)` sorted by count
    /// descending with ties in first-seen order.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self.words.into_iter().zip(self.counts).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
