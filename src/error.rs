//! Error types for corpus analysis

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced by loading, browsing and analysing a corpus
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Field name is not one of the recognized text fields
    #[error("unknown text field \"{0}\" (expected article, reference_summary or generated_summary)")]
    InvalidField(String),

    /// Record ordinal outside `[0, len)`
    #[error("record {ordinal} is out of range (corpus has {len} records)")]
    OutOfRange { ordinal: usize, len: usize },

    /// User-supplied line number is not a positive whole number
    #[error("\"{0}\" is not a valid line number")]
    InvalidOrdinal(String),

    /// Required CSV column is absent from the header row
    #[error("missing required column \"{0}\"")]
    MissingColumn(String),

    /// Configuration value rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
