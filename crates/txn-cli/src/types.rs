use std::path::PathBuf;

#[derive(Debug)]
pub struct JobResult {
    pub job_name: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows_read: usize,
    pub rows_written: usize,
    pub suspicious: usize,
}
