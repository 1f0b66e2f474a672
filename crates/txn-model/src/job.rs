//! Job configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed source location for the raw transaction feed.
pub const DEFAULT_INPUT_PATH: &str = "data/banktransaction_rawdata.csv";

/// Fixed destination location for the cleansed output.
pub const DEFAULT_OUTPUT_PATH: &str = "data/banktransaction_cleandata.csv";

/// Configuration for a single cleansing run.
///
/// Only the job name is supplied by the caller; source and destination are
/// fixed constants in this version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Name identifying this run in logs and the summary.
    pub job_name: String,
    /// Location of the raw transaction file.
    pub input_path: PathBuf,
    /// Location the cleansed projection is written to. Overwritten on success.
    pub output_path: PathBuf,
}

impl JobConfig {
    /// Build the configuration for a named run against the fixed locations.
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
