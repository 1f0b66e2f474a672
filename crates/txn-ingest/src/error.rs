//! Error types for transaction feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the raw transaction feed.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the header row of the source file.
    #[error("failed to read header of {path}: {source}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Source file has no header row.
    #[error("source file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required columns missing from the source header. Fatal: the run
    /// aborts before any output is written.
    #[error("source schema mismatch in {path}: missing columns {}", columns.join(", "))]
    MissingColumns { columns: Vec<String>, path: PathBuf },

    /// Failed to parse the CSV with the dataframe engine.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_column() {
        let err = IngestError::MissingColumns {
            columns: vec!["amount".to_string(), "currency".to_string()],
            path: PathBuf::from("raw.csv"),
        };
        assert_eq!(
            err.to_string(),
            "source schema mismatch in raw.csv: missing columns amount, currency"
        );
    }

    #[test]
    fn error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("amount".into());
        let err: IngestError = polars_err.into();
        assert!(matches!(err, IngestError::DataFrame { .. }));
    }
}
