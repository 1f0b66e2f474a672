//! Writing the cleansed projection to the destination file.
//!
//! The destination is replaced wholesale: the frame is written to a
//! temporary sibling file first and renamed into place, so a failed run
//! leaves any prior output untouched.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use thiserror::Error;

/// Errors that can occur while writing the cleansed output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed filesystem operation on the destination.
    #[error("failed to write output {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the frame as CSV.
    #[error("failed to serialize CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Write the cleansed frame as a delimited file with a header row,
/// overwriting any existing data at `path`.
pub fn write_transactions(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = staging_path(path);
    let file = File::create(&tmp_path).map_err(|source| OutputError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    let write_result = CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|e| OutputError::CsvWrite {
            path: tmp_path.clone(),
            message: e.to_string(),
        });
    if let Err(err) = write_result {
        // Best effort: do not leave a partial staging file behind.
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }

    std::fs::rename(&tmp_path, path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        "wrote cleansed transactions"
    );
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("transaction_id".into(), vec!["T1", "T2"]),
            Column::new("amount".into(), vec![0.0, 7500.5]),
            Column::new("is_suspicious".into(), vec![false, true]),
        ])
        .expect("build frame")
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cleandata.csv");
        let mut df = sample_frame();
        write_transactions(&mut df, &path).expect("write output");

        let content = std::fs::read_to_string(&path).expect("read output");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("transaction_id,amount,is_suspicious"));
        assert_eq!(content.lines().count(), 3);
        assert!(!path.with_file_name("cleandata.csv.tmp").exists());
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cleandata.csv");
        std::fs::write(&path, "stale data\n").expect("seed stale output");

        let mut df = sample_frame();
        write_transactions(&mut df, &path).expect("write output");
        let content = std::fs::read_to_string(&path).expect("read output");
        assert!(!content.contains("stale data"));
        assert!(content.starts_with("transaction_id"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested/out/cleandata.csv");
        let mut df = sample_frame();
        write_transactions(&mut df, &path).expect("write output");
        assert!(path.exists());
    }
}
