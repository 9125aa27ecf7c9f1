//! CSV corpus loading
//!
//! Expects a header row containing `article`, `highlights` and `t5_summary`.
//! Column order is free and extra columns (ids, indices) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{AnalysisError, Result};
use crate::types::{Corpus, TextField, TextRecord};

/// Reads article/summary CSV files into a [`Corpus`].
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load a corpus from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Corpus> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading corpus");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a corpus from any CSV byte source
    pub fn from_reader<R: Read>(reader: R) -> Result<Corpus> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let [article, highlights, generated] = TextField::ALL.map(|f| column_index(&headers, f));
        let (article, highlights, generated) = (article?, highlights?, generated?);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();
            records.push(TextRecord::new(cell(article), cell(highlights), cell(generated)));
        }

        tracing::info!(records = records.len(), "corpus loaded");
        Ok(Corpus::new(records))
    }
}

fn column_index(headers: &StringRecord, field: TextField) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == field.column())
        .ok_or_else(|| AnalysisError::MissingColumn(field.column().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "\
id,article,highlights,t5_summary
1,\"Storm hits the coast, leaving damage.\",Storm damage.,a storm hit the coast
2,Markets rally,Stocks up,markets rallied
";
        let corpus = CorpusLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(corpus.len(), 2);
        let first = corpus.get(0).unwrap();
        assert_eq!(first.article, "Storm hits the coast, leaving damage.");
        assert_eq!(first.reference_summary, "Storm damage.");
        assert_eq!(first.generated_summary, "a storm hit the coast");
    }

    #[test]
    fn test_column_order_is_free() {
        let data = "t5_summary,article,highlights\nmodel,body,human\n";
        let corpus = CorpusLoader::from_reader(data.as_bytes()).unwrap();
        let record = corpus.get(0).unwrap();

        assert_eq!(record.article, "body");
        assert_eq!(record.reference_summary, "human");
        assert_eq!(record.generated_summary, "model");
    }

    #[test]
    fn test_missing_column() {
        let data = "article,highlights\nbody,human\n";
        let err = CorpusLoader::from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AnalysisError::MissingColumn(ref c) if c == "t5_summary"));
    }

    #[test]
    fn test_header_only_gives_empty_corpus() {
        let data = "article,highlights,t5_summary\n";
        let corpus = CorpusLoader::from_reader(data.as_bytes()).unwrap();

        assert!(corpus.is_empty());
    }

    #[test]
    fn test_multiline_quoted_article() {
        let data = "article,highlights,t5_summary\n\"line one\nline two\",h,t\n";
        let corpus = CorpusLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(corpus.get(0).unwrap().article, "line one\nline two");
    }

    #[test]
    fn test_missing_file() {
        let err = CorpusLoader::from_path("/nonexistent/cnn_daily_t5.csv").unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
