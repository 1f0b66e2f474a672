//! Record normalization for the transaction cleansing job.
//!
//! The record normalizer is a pure, row-independent mapping over a frame
//! of raw transaction records: per-value rules live in [`normalize`], the
//! frame-level pipeline and fixed output projection in [`pipeline`].

pub mod error;
pub mod normalize;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use normalize::{cleanse_description, is_suspicious, normalize_amount};
pub use pipeline::{normalize_records, suspicious_count};
