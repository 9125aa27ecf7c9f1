//! Single-record lookup for side-by-side reading
//!
//! The caller owns the current selection and asks for a record each time it
//! needs one; nothing here remembers what was shown last. Users count lines
//! from 1, ordinals count from 0, and [`RecordBrowser::parse_line_number`]
//! converts between the two.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::types::{Corpus, TextField, TextRecord};

/// Raw fields of one record, unmodified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView<'a> {
    pub ordinal: usize,
    pub article: &'a str,
    pub reference_summary: &'a str,
    pub generated_summary: &'a str,
}

impl<'a> RecordView<'a> {
    fn new(ordinal: usize, record: &'a TextRecord) -> Self {
        Self {
            ordinal,
            article: &record.article,
            reference_summary: &record.reference_summary,
            generated_summary: &record.generated_summary,
        }
    }

    pub fn field(&self, field: TextField) -> &'a str {
        match field {
            TextField::Article => self.article,
            TextField::ReferenceSummary => self.reference_summary,
            TextField::GeneratedSummary => self.generated_summary,
        }
    }

    /// 1-based line number as shown to users
    pub fn line_number(&self) -> usize {
        self.ordinal + 1
    }
}

/// Looks up records of a corpus by zero-based ordinal or 1-based line number.
pub struct RecordBrowser<'a> {
    corpus: &'a Corpus,
}

impl<'a> RecordBrowser<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Record at zero-based `ordinal`
    pub fn view(&self, ordinal: usize) -> Result<RecordView<'a>> {
        let record = self.corpus.get(ordinal)?;
        Ok(RecordView::new(ordinal, record))
    }

    /// Turn a typed 1-based line number into an ordinal, checking range.
    ///
    /// Only positive whole numbers in ASCII digits are accepted (surrounding
    /// whitespace is ignored); values past the last record are `OutOfRange`.
    pub fn parse_line_number(&self, input: &str) -> Result<usize> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AnalysisError::InvalidOrdinal(input.to_string()));
        }
        let ordinal = match trimmed.parse::<usize>() {
            Ok(line) if line > 0 => line - 1,
            _ => return Err(AnalysisError::InvalidOrdinal(input.to_string())),
        };

        if ordinal < self.corpus.len() {
            Ok(ordinal)
        } else {
            Err(AnalysisError::OutOfRange {
                ordinal,
                len: self.corpus.len(),
            })
        }
    }

    /// Parse and fetch in one step
    pub fn view_line(&self, input: &str) -> Result<RecordView<'a>> {
        let ordinal = self.parse_line_number(input)?;
        self.view(ordinal)
    }
}
