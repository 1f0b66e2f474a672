pub mod job;
pub mod reference;
pub mod schema;

pub use job::JobConfig;
pub use reference::{
    OTHER_ACCOUNT_TYPE, OTHER_COUNTRY, SUSPICIOUS_AMOUNT_THRESHOLD, account_type_standardized,
    country_name,
};
pub use schema::{DERIVED_COLUMNS, OUTPUT_COLUMNS, RAW_COLUMNS, columns};
