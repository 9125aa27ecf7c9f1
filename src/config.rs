//! Analysis configuration.
//!
//! Every field has a default, so `{}` is a complete configuration.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "top_k": 10,
//!   "stopwords": "en",
//!   "extra_stopwords": ["cnn", "said"],
//!   "removed_stopwords": [],
//!   "histogram_bins": 20,
//!   "cloud_max_words": 200,
//!   "fields": ["article", "highlights", "t5_summary"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::frequency::cloud::DEFAULT_CLOUD_MAX_WORDS;
use crate::frequency::{WordFrequencyAnalyzer, DEFAULT_TOP_K};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::TextField;

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Words in each frequency table
    pub top_k: usize,

    /// Stopword language code, or `"none"`
    pub stopwords: String,

    /// Added on top of the language list
    pub extra_stopwords: Vec<String>,

    /// Taken out of the language list
    pub removed_stopwords: Vec<String>,

    pub histogram_bins: usize,

    pub cloud_max_words: usize,

    /// Fields covered by a report, in output order
    pub fields: Vec<TextField>,

    /// If `true`, unrecognized keys are errors; otherwise they are logged.
    pub strict: bool,

    /// Captures any keys not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            stopwords: "en".to_string(),
            extra_stopwords: Vec::new(),
            removed_stopwords: Vec::new(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            cloud_max_words: DEFAULT_CLOUD_MAX_WORDS,
            fields: TextField::ALL.to_vec(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every rule and report all failures together.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.top_k == 0 {
            problems.push("top_k must be at least 1".to_string());
        }
        if self.histogram_bins == 0 {
            problems.push("histogram_bins must be at least 1".to_string());
        }
        if self.cloud_max_words == 0 {
            problems.push("cloud_max_words must be at least 1".to_string());
        }
        if self.fields.is_empty() {
            problems.push("fields must name at least one text field".to_string());
        }
        if let Err(err) = StopwordFilter::for_language(&self.stopwords) {
            problems.push(err.to_string());
        }

        let mut unknown: Vec<&String> = self.unknown_fields.keys().collect();
        unknown.sort();
        for key in unknown {
            if self.strict {
                problems.push(format!("unrecognized field \"{key}\""));
            } else {
                tracing::warn!(field = %key, "ignoring unrecognized config field");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::InvalidConfig(problems.join("; ")))
        }
    }

    /// Stopword set after applying additions and removals
    pub fn build_stopwords(&self) -> Result<StopwordFilter> {
        let mut filter = StopwordFilter::for_language(&self.stopwords)?;
        filter.add_stopwords(self.extra_stopwords.as_slice());
        filter.remove_stopwords(self.removed_stopwords.as_slice());
        Ok(filter)
    }

    pub fn build_analyzer(&self) -> Result<WordFrequencyAnalyzer> {
        Ok(WordFrequencyAnalyzer::new(self.build_stopwords()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = AnalysisConfig::from_json_str("{}").unwrap();

        assert_eq!(config.top_k, 10);
        assert_eq!(config.stopwords, "en");
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.cloud_max_words, 200);
        assert_eq!(config.fields, TextField::ALL.to_vec());
    }

    #[test]
    fn test_field_aliases_in_json() {
        let config =
            AnalysisConfig::from_json_str(r#"{ "fields": ["t5_summary", "highlights"] }"#).unwrap();

        assert_eq!(
            config.fields,
            vec![TextField::GeneratedSummary, TextField::ReferenceSummary]
        );
    }

    #[test]
    fn test_unknown_field_name_in_fields_fails() {
        let err = AnalysisConfig::from_json_str(r#"{ "fields": ["headline"] }"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let err = AnalysisConfig::from_json_str(
            r#"{ "top_k": 0, "histogram_bins": 0, "fields": [], "stopwords": "xx" }"#,
        )
        .unwrap_err();

        let AnalysisError::InvalidConfig(message) = err else {
            panic!("expected InvalidConfig");
        };
        assert!(message.contains("top_k"));
        assert!(message.contains("histogram_bins"));
        assert!(message.contains("fields"));
        assert!(message.contains("xx"));
    }

    #[test]
    fn test_unknown_keys_only_fail_when_strict() {
        assert!(AnalysisConfig::from_json_str(r#"{ "topk": 5 }"#).is_ok());

        let err = AnalysisConfig::from_json_str(r#"{ "topk": 5, "strict": true }"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(ref m) if m.contains("topk")));
    }

    #[test]
    fn test_build_stopwords_applies_overrides() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "extra_stopwords": ["CNN"], "removed_stopwords": ["the"] }"#,
        )
        .unwrap();
        let filter = config.build_stopwords().unwrap();

        assert!(filter.is_stopword("cnn"));
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_serialize_keeps_unknown_fields() {
        let config = AnalysisConfig::from_json_str(r#"{ "extra": 1 }"#).unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["extra"], 1);
        assert_eq!(value["top_k"], 10);
    }

    #[test]
    fn test_from_path_reads_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "top_k": 5, "extra_stopwords": ["cnn"] }}"#).unwrap();

        let config = AnalysisConfig::from_path(file.path()).unwrap();
        assert_eq!(config.top_k, 5);
        assert!(config.build_stopwords().unwrap().is_stopword("CNN"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AnalysisConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
