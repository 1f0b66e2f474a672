//! Error types for record normalization.

use thiserror::Error;

/// Errors that can occur while normalizing transaction records.
///
/// Field-level parse failures are not errors; they are recovered locally
/// by substitution (amount defaults to 0.0, description becomes absent).
#[derive(Debug, Error)]
pub enum TransformError {
    /// Required column missing from the input frame. Fatal schema mismatch.
    #[error("required column '{column}' not found in input")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TransformError>;
