//! Word-cloud weights
//!
//! A word cloud sizes each word by its count relative to the most frequent
//! word. The weights here are that ratio; layout and rendering belong to the
//! caller.

use serde::Serialize;

use super::WordFrequencyAnalyzer;
use crate::types::{Corpus, TextField};

/// Default cap on words placed in a cloud
pub const DEFAULT_CLOUD_MAX_WORDS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`
    pub weight: f64,
}

/// Ranked words with relative weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudWeights {
    pub field: TextField,
    pub words: Vec<CloudWord>,
}

impl WordCloudWeights {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordFrequencyAnalyzer {
    /// Weights for the `max_words` most frequent words of `field`, ranked the
    /// same way as [`WordFrequencyAnalyzer::top_words`].
    pub fn word_cloud(&self, corpus: &Corpus, field: TextField, max_words: usize) -> WordCloudWeights {
        let table = self.top_words(corpus, field, max_words);
        let max_count = table.entries.first().map(|e| e.count).unwrap_or(0);

        let words = table
            .entries
            .into_iter()
            .map(|e| CloudWord {
                weight: e.count as f64 / max_count as f64,
                word: e.word,
                count: e.count,
            })
            .collect();

        WordCloudWeights { field, words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::types::TextRecord;

    #[test]
    fn test_weights_relative_to_top_word() {
        let corpus: Corpus = vec![TextRecord::new("", "", "rain rain rain rain wind wind sun")].into();
        let analyzer = WordFrequencyAnalyzer::new(StopwordFilter::empty());
        let cloud = analyzer.word_cloud(&corpus, TextField::GeneratedSummary, 10);

        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.words[0].word, "rain");
        assert!((cloud.words[0].weight - 1.0).abs() < 1e-9);
        assert!((cloud.words[1].weight - 0.5).abs() < 1e-9);
        assert!((cloud.words[2].weight - 0.25).abs() < 1e-9);
        for pair in cloud.words.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn test_cloud_respects_max_words() {
        let corpus: Corpus = vec![TextRecord::new("alpha beta gamma delta", "", "")].into();
        let analyzer = WordFrequencyAnalyzer::new(StopwordFilter::empty());

        assert_eq!(analyzer.word_cloud(&corpus, TextField::Article, 2).len(), 2);
        assert!(analyzer
            .word_cloud(&Corpus::default(), TextField::Article, DEFAULT_CLOUD_MAX_WORDS)
            .is_empty());
    }
}
