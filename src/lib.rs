//! # corpus-insights
//!
//! Length and word-frequency analysis for corpora of news articles paired
//! with human-written highlights and model-generated summaries.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use corpus_insights::{CorpusLoader, StopwordFilter, TextField, WordFrequencyAnalyzer};
//!
//! let corpus = CorpusLoader::from_path("cnn_daily_t5.csv")?;
//! let analyzer = WordFrequencyAnalyzer::new(StopwordFilter::english());
//!
//! for entry in analyzer.top_words(&corpus, TextField::GeneratedSummary, 10).entries {
//!     println!("{}: {}", entry.word, entry.count);
//! }
//! ```
//!
//! All analysis is a pure function of an immutable [`Corpus`]; a corpus can be
//! cloned cheaply and shared across threads.

pub mod browser;
pub mod config;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod metrics;
pub mod nlp;
pub mod report;
pub mod types;

pub use browser::{RecordBrowser, RecordView};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use frequency::{WordCloudWeights, WordCount, WordFrequencyAnalyzer, WordFrequencyTable};
pub use loader::CorpusLoader;
pub use metrics::summary::{Histogram, LengthSummary};
pub use metrics::{CorpusMetrics, LengthSeries};
pub use nlp::stopwords::StopwordFilter;
pub use report::{CorpusReport, FieldReport};
pub use types::{Corpus, TextField, TextRecord};
