// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not extract year from {0}")]
    InvalidYear(String),

    #[error("No station name column found (expected one of: {})", .expected.join(", "))]
    MissingStationColumn { expected: Vec<String> },

    #[error("No month columns found")]
    NoMonthColumns,

    #[error("No CSV files found in {} folder", .0.display())]
    NoCsvFiles(PathBuf),

    #[error("No valid data files could be processed")]
    NoValidData,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AnalysisError {
    /// The file could not be read or decoded, as opposed to having an unusable layout
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            AnalysisError::FileOperation { .. } | AnalysisError::Csv(_) | AnalysisError::Io(_)
        )
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Serialization(err.to_string())
    }
}
