//! Fixed input and output schemas for the transaction cleansing job.
//!
//! The raw feed carries a single hard-coded schema; the cleansing pipeline
//! replaces `country_code` and `account_type` with derived columns and adds
//! the suspicion flag. Column order in [`OUTPUT_COLUMNS`] is the order
//! written to the destination file.

/// Column names shared by the raw and projected schemas.
pub mod columns {
    pub const TRANSACTION_ID: &str = "transaction_id";
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const ACCOUNT_ID: &str = "account_id";
    pub const TRANSACTION_DATE: &str = "transaction_date";
    pub const TRANSACTION_TYPE: &str = "transaction_type";
    pub const AMOUNT: &str = "amount";
    pub const CURRENCY: &str = "currency";
    pub const DESCRIPTION: &str = "description";
    pub const COUNTRY_CODE: &str = "country_code";
    pub const ACCOUNT_TYPE: &str = "account_type";

    pub const COUNTRY_NAME: &str = "country_name";
    pub const ACCOUNT_TYPE_STANDARDIZED: &str = "account_type_standardized";
    pub const IS_SUSPICIOUS: &str = "is_suspicious";
}

/// Columns the source file must provide. Absence of any of these is a
/// fatal schema mismatch, not a recoverable condition.
pub const RAW_COLUMNS: [&str; 10] = [
    columns::TRANSACTION_ID,
    columns::CUSTOMER_ID,
    columns::ACCOUNT_ID,
    columns::TRANSACTION_DATE,
    columns::TRANSACTION_TYPE,
    columns::AMOUNT,
    columns::CURRENCY,
    columns::DESCRIPTION,
    columns::COUNTRY_CODE,
    columns::ACCOUNT_TYPE,
];

/// Columns produced by the pipeline.
pub const DERIVED_COLUMNS: [&str; 3] = [
    columns::COUNTRY_NAME,
    columns::ACCOUNT_TYPE_STANDARDIZED,
    columns::IS_SUSPICIOUS,
];

/// Exact projection written to the destination, in order.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    columns::TRANSACTION_ID,
    columns::CUSTOMER_ID,
    columns::ACCOUNT_ID,
    columns::TRANSACTION_DATE,
    columns::TRANSACTION_TYPE,
    columns::AMOUNT,
    columns::CURRENCY,
    columns::DESCRIPTION,
    columns::ACCOUNT_TYPE_STANDARDIZED,
    columns::COUNTRY_NAME,
    columns::IS_SUSPICIOUS,
];
