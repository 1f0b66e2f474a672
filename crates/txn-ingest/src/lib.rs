//! Transaction feed ingestion: CSV loading and schema validation.

pub mod error;
pub mod reader;
pub mod values;

pub use error::{IngestError, Result};
pub use reader::{read_transactions, validate_schema};
pub use values::{any_to_f64, any_to_string, parse_f64};
