//! Loading the raw transaction feed into a DataFrame.
//!
//! The header row is validated against the required schema before the
//! dataframe engine parses the file, so a schema mismatch fails fast and
//! names every missing column instead of surfacing as a column-not-found
//! error halfway through the pipeline.

use std::path::Path;
use std::sync::Arc;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, Field, Schema, SerReader};

use txn_model::{RAW_COLUMNS, columns};

use crate::error::{IngestError, Result};

/// Number of rows sampled for schema inference, matching the engine's
/// behavior of inferring column types from the leading data.
const INFER_SCHEMA_ROWS: usize = 100;

/// Columns whose field-level parse errors are recovered downstream.
///
/// `amount` and `description` are loaded as text regardless of what the
/// inference sample suggests: a sentinel like `NULL` past the sample window
/// must reach the pipeline for substitution, not fail the read.
fn dtype_overrides() -> Arc<Schema> {
    Arc::new(Schema::from_iter([
        Field::new(columns::AMOUNT.into(), DataType::String),
        Field::new(columns::DESCRIPTION.into(), DataType::String),
    ]))
}

/// Read the source header row and verify all required columns are present.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumns`] listing every absent column,
/// [`IngestError::EmptyCsv`] when the file has no header row.
pub fn validate_schema(path: &Path) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::HeaderRead {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::HeaderRead {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let present: Vec<&str> = headers.iter().map(str::trim).collect();
    let missing: Vec<String> = RAW_COLUMNS
        .iter()
        .filter(|required| !present.contains(*required))
        .map(|required| (*required).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            columns: missing,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Load the raw transaction feed.
///
/// Validates the header against the required schema, then reads the whole
/// file with type inference. The recoverable columns are pinned to text so
/// the inference sample cannot make later malformed values fatal. A file
/// with a valid header and no data rows yields an empty frame, which is
/// not an error.
pub fn read_transactions(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    validate_schema(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_schema_overwrite(Some(dtype_overrides()))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded raw transactions"
    );
    Ok(df)
}
