//! Core data types: text fields, records and the corpus

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// One of the three text columns of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Full news article body
    Article,
    /// Human-written highlights
    #[serde(alias = "highlights")]
    ReferenceSummary,
    /// Model-generated summary
    #[serde(alias = "t5_summary")]
    GeneratedSummary,
}

impl TextField {
    /// All fields, in column order.
    pub const ALL: [TextField; 3] = [
        TextField::Article,
        TextField::ReferenceSummary,
        TextField::GeneratedSummary,
    ];

    /// Canonical field name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::ReferenceSummary => "reference_summary",
            Self::GeneratedSummary => "generated_summary",
        }
    }

    /// Column header in the source CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::ReferenceSummary => "highlights",
            Self::GeneratedSummary => "t5_summary",
        }
    }

    /// Human-facing label for charts and listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::ReferenceSummary => "Highlights",
            Self::GeneratedSummary => "T5 Summary",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextField {
    type Err = AnalysisError;

    /// Accepts canonical names and CSV column names, case-insensitively.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "reference_summary" | "highlights" => Ok(Self::ReferenceSummary),
            "generated_summary" | "t5_summary" => Ok(Self::GeneratedSummary),
            _ => Err(AnalysisError::InvalidField(value.to_string())),
        }
    }
}

/// A single row of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRecord {
    pub article: String,
    pub reference_summary: String,
    pub generated_summary: String,
}

impl TextRecord {
    /// Build a record from its three text values.
    pub fn new(
        article: impl Into<String>,
        reference_summary: impl Into<String>,
        generated_summary: impl Into<String>,
    ) -> Self {
        Self {
            article: article.into(),
            reference_summary: reference_summary.into(),
            generated_summary: generated_summary.into(),
        }
    }

    /// Borrow the value of `field`.
    pub fn get(&self, field: TextField) -> &str {
        match field {
            TextField::Article => &self.article,
            TextField::ReferenceSummary => &self.reference_summary,
            TextField::GeneratedSummary => &self.generated_summary,
        }
    }
}

/// Immutable, ordered collection of records.
///
/// Cloning is cheap: the records live behind an `Arc` and are never mutated
/// after construction, so a corpus can be handed to several threads at once.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Arc<[TextRecord]>,
}

impl Corpus {
    /// Wrap `records`, keeping their order.
    pub fn new(records: Vec<TextRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at zero-based `ordinal`.
    pub fn get(&self, ordinal: usize) -> Result<&TextRecord> {
        self.records.get(ordinal).ok_or(AnalysisError::OutOfRange {
            ordinal,
            len: self.records.len(),
        })
    }

    /// All records, in load order.
    pub fn records(&self) -> &[TextRecord] {
        &self.records
    }

    /// Values of `field` across all records, in record order.
    pub fn values(&self, field: TextField) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(move |r| r.get(field))
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<TextRecord>> for Corpus {
    fn from(records: Vec<TextRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<TextRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = TextRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
