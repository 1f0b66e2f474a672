//! CLI library components for the transaction cleansing job.

pub mod logging;
