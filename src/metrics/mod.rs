//! Per-record length metrics
//!
//! [`CorpusMetrics::lengths`] is the raw series behind the length charts;
//! [`summary`] derives box-plot and histogram numbers from it.

pub mod summary;

use serde::Serialize;

use crate::types::{Corpus, TextField};

/// Character count of one field for every record, in record order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthSeries {
    pub field: TextField,
    pub lengths: Vec<usize>,
}

impl LengthSeries {
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Length of the record at `ordinal`
    pub fn get(&self, ordinal: usize) -> Option<usize> {
        self.lengths.get(ordinal).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lengths.iter().copied()
    }
}

/// Length computations over a corpus
pub struct CorpusMetrics;

impl CorpusMetrics {
    /// Number of characters (Unicode scalar values, not bytes) in `field` for
    /// each record. Whitespace and punctuation count.
    pub fn lengths(corpus: &Corpus, field: TextField) -> LengthSeries {
        LengthSeries {
            field,
            lengths: corpus.values(field).map(|v| v.chars().count()).collect(),
        }
    }

    /// One series per field, in [`TextField::ALL`] order
    pub fn all_lengths(corpus: &Corpus) -> Vec<LengthSeries> {
        TextField::ALL
            .iter()
            .map(|&field| Self::lengths(corpus, field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextRecord;

    fn sample_corpus() -> Corpus {
        vec![
            TextRecord::new("Hello, world!", "Hi", ""),
            TextRecord::new("Zo\u{eb} says \u{201c}hi\u{201d}", "two words", "x"),
        ]
        .into()
    }

    #[test]
    fn test_lengths_count_characters() {
        let series = CorpusMetrics::lengths(&sample_corpus(), TextField::Article);

        assert_eq!(series.lengths, vec![13, 13]);
        assert_eq!(series.field, TextField::Article);
    }

    #[test]
    fn test_lengths_are_not_bytes() {
        let corpus: Corpus = vec![TextRecord::new("\u{e9}", "\u{65e5}\u{672c}\u{8a9e}", "")].into();

        assert_eq!(CorpusMetrics::lengths(&corpus, TextField::Article).get(0), Some(1));
        assert_eq!(
            CorpusMetrics::lengths(&corpus, TextField::ReferenceSummary).get(0),
            Some(3)
        );
    }

    #[test]
    fn test_series_length_matches_corpus() {
        let corpus = sample_corpus();
        for series in CorpusMetrics::all_lengths(&corpus) {
            assert_eq!(series.len(), corpus.len());
        }
    }

    #[test]
    fn test_empty_corpus() {
        let series = CorpusMetrics::lengths(&Corpus::default(), TextField::GeneratedSummary);
        assert!(series.is_empty());
    }

    #[test]
    fn test_lengths_deterministic() {
        let corpus = sample_corpus();
        assert_eq!(
            CorpusMetrics::lengths(&corpus, TextField::ReferenceSummary),
            CorpusMetrics::lengths(&corpus, TextField::ReferenceSummary)
        );
    }
}
