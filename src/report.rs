//! Whole-corpus report: every chart's numbers for every configured field
//!
//! Fields are independent reads of the same immutable corpus, so they are
//! computed in parallel and reassembled in configured order.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::frequency::{WordFrequencyAnalyzer, WordFrequencyTable};
use crate::metrics::summary::{Histogram, LengthSummary};
use crate::metrics::CorpusMetrics;
use crate::types::{Corpus, TextField};

/// Length and word-frequency results for one text field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub field: TextField,
    pub label: &'static str,
    /// `None` when the corpus is empty
    pub length_summary: Option<LengthSummary>,
    pub length_histogram: Histogram,
    pub top_words: WordFrequencyTable,
}

impl FieldReport {
    fn build(
        corpus: &Corpus,
        analyzer: &WordFrequencyAnalyzer,
        field: TextField,
        config: &AnalysisConfig,
    ) -> Self {
        let lengths = CorpusMetrics::lengths(corpus, field);
        Self {
            field,
            label: field.label(),
            length_summary: LengthSummary::from_series(&lengths),
            length_histogram: Histogram::from_series(&lengths, config.histogram_bins),
            top_words: analyzer.top_words(corpus, field, config.top_k),
        }
    }
}

/// Per-field results for a whole corpus, in configured field order.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    pub records: usize,
    pub fields: Vec<FieldReport>,
}

impl CorpusReport {
    #[tracing::instrument(skip_all, fields(records = corpus.len()))]
    pub fn build(corpus: &Corpus, config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = config.build_analyzer()?;

        let fields = config
            .fields
            .par_iter()
            .map(|&field| FieldReport::build(corpus, &analyzer, field, config))
            .collect();

        tracing::info!(fields = config.fields.len(), "report built");
        Ok(Self {
            records: corpus.len(),
            fields,
        })
    }

    pub fn field(&self, field: TextField) -> Option<&FieldReport> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextRecord;

    fn corpus() -> Corpus {
        vec![
            TextRecord::new(
                "Rescuers searched the flooded valley on Monday.",
                "Rescuers search flooded valley.",
                "rescuers searched the valley",
            ),
            TextRecord::new(
                "The valley flooded after heavy rain, officials said.",
                "Heavy rain floods valley.",
                "heavy rain flooded the valley",
            ),
        ]
        .into()
    }

    #[test]
    fn test_report_covers_configured_fields_in_order() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "fields": ["t5_summary", "article"], "top_k": 3 }"#,
        )
        .unwrap();
        let report = CorpusReport::build(&corpus(), &config).unwrap();

        assert_eq!(report.records, 2);
        let order: Vec<_> = report.fields.iter().map(|f| f.field).collect();
        assert_eq!(order, vec![TextField::GeneratedSummary, TextField::Article]);
        assert!(report.field(TextField::ReferenceSummary).is_none());

        let generated = report.field(TextField::GeneratedSummary).unwrap();
        assert_eq!(generated.label, "T5 Summary");
        assert!(generated.top_words.len() <= 3);
        assert_eq!(generated.top_words.entries[0].word, "valley");
        assert_eq!(generated.top_words.entries[0].count, 2);
        assert_eq!(generated.length_histogram.total(), 2);
    }

    #[test]
    fn test_report_on_empty_corpus() {
        let report = CorpusReport::build(&Corpus::default(), &AnalysisConfig::default()).unwrap();

        assert_eq!(report.records, 0);
        assert_eq!(report.fields.len(), 3);
        for field in &report.fields {
            assert!(field.length_summary.is_none());
            assert!(field.top_words.is_empty());
            assert_eq!(field.length_histogram.bins(), 0);
        }
    }

    #[test]
    fn test_report_rejects_invalid_config() {
        let config = AnalysisConfig {
            top_k: 0,
            ..AnalysisConfig::default()
        };
        assert!(CorpusReport::build(&corpus(), &config).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let report = CorpusReport::build(&corpus(), &AnalysisConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["records"], 2);
        assert_eq!(value["fields"][0]["field"], "article");
        assert_eq!(value["fields"][1]["label"], "Highlights");
        assert!(value["fields"][0]["length_summary"]["median"].is_number());
    }
}
