//! Frame-level record normalization.
//!
//! Applies the cleansing rules in a fixed order, each computed from the
//! raw input columns, and assembles the fixed output projection:
//!
//! 1. amount normalization (null/unparseable -> 0.0)
//! 2. description cleansing (literal "NULL" -> absent)
//! 3. country mapping (country_code -> country_name)
//! 4. account-type standardization
//! 5. suspicion flag (normalized amount > threshold)
//! 6. projection to the fixed eleven-column output
//!
//! Every rule is row-independent; the input frame is not mutated and the
//! output has the same number of rows.

use polars::prelude::{AnyValue, Column, DataFrame};

use txn_ingest::any_to_string;
use txn_model::schema::columns;
use txn_model::{RAW_COLUMNS, account_type_standardized, country_name};

use crate::error::{Result, TransformError};
use crate::normalize::{cleanse_description, is_suspicious, normalize_amount};

fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

/// Normalize and enrich a frame of raw transaction records.
///
/// Returns a new frame containing exactly the output projection, in order,
/// with one row per input row.
///
/// # Errors
///
/// Fails only on a schema mismatch (missing raw column) or an engine-level
/// frame error. Malformed field values never fail; they are substituted.
pub fn normalize_records(df: &DataFrame) -> Result<DataFrame> {
    for name in RAW_COLUMNS {
        required_column(df, name)?;
    }
    let height = df.height();

    let amount_col = required_column(df, columns::AMOUNT)?;
    let mut amounts = Vec::with_capacity(height);
    for idx in 0..height {
        amounts.push(normalize_amount(&cell(amount_col, idx)));
    }

    let description_col = required_column(df, columns::DESCRIPTION)?;
    let mut descriptions: Vec<Option<String>> = Vec::with_capacity(height);
    for idx in 0..height {
        let cleansed = match cell(description_col, idx) {
            AnyValue::Null => None,
            value => {
                let text = any_to_string(&value);
                cleanse_description(&text).map(ToOwned::to_owned)
            }
        };
        descriptions.push(cleansed);
    }

    let country_col = required_column(df, columns::COUNTRY_CODE)?;
    let mut countries = Vec::with_capacity(height);
    for idx in 0..height {
        countries.push(country_name(&any_to_string(&cell(country_col, idx))));
    }

    let account_col = required_column(df, columns::ACCOUNT_TYPE)?;
    let mut account_types = Vec::with_capacity(height);
    for idx in 0..height {
        account_types.push(account_type_standardized(&any_to_string(&cell(
            account_col, idx,
        ))));
    }

    let flags: Vec<bool> = amounts.iter().map(|amount| is_suspicious(*amount)).collect();
    let suspicious_count = flags.iter().filter(|flag| **flag).count();

    // Fixed projection, in output order. Identifier and passthrough columns
    // keep their inferred types; derived columns replace the raw forms.
    let out = DataFrame::new(vec![
        required_column(df, columns::TRANSACTION_ID)?.clone(),
        required_column(df, columns::CUSTOMER_ID)?.clone(),
        required_column(df, columns::ACCOUNT_ID)?.clone(),
        required_column(df, columns::TRANSACTION_DATE)?.clone(),
        required_column(df, columns::TRANSACTION_TYPE)?.clone(),
        Column::new(columns::AMOUNT.into(), amounts),
        required_column(df, columns::CURRENCY)?.clone(),
        Column::new(columns::DESCRIPTION.into(), descriptions),
        Column::new(columns::ACCOUNT_TYPE_STANDARDIZED.into(), account_types),
        Column::new(columns::COUNTRY_NAME.into(), countries),
        Column::new(columns::IS_SUSPICIOUS.into(), flags),
    ])?;

    tracing::debug!(
        rows = height,
        suspicious = suspicious_count,
        "normalized transaction records"
    );
    Ok(out)
}

/// Count flagged rows in a normalized frame. Used by the run summary.
pub fn suspicious_count(df: &DataFrame) -> Result<usize> {
    let flags = required_column(df, columns::IS_SUSPICIOUS)?;
    let mut count = 0;
    for idx in 0..df.height() {
        if matches!(cell(flags, idx), AnyValue::Boolean(true)) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use txn_model::OUTPUT_COLUMNS;

    fn raw_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("transaction_id".into(), vec!["T1", "T2", "T3", "T4"]),
            Column::new("customer_id".into(), vec!["C1", "C2", "C3", "C4"]),
            Column::new("account_id".into(), vec!["A1", "A2", "A3", "A4"]),
            Column::new(
                "transaction_date".into(),
                vec!["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
            ),
            Column::new(
                "transaction_type".into(),
                vec!["DEBIT", "CREDIT", "DEBIT", "CREDIT"],
            ),
            Column::new(
                "amount".into(),
                vec![Some("NULL"), Some("7500.50"), Some("5000"), None],
            ),
            Column::new("currency".into(), vec!["USD", "USD", "GBP", "EUR"]),
            Column::new(
                "description".into(),
                vec![Some(" null "), Some("Wire transfer"), Some("  Rent  "), None],
            ),
            Column::new("country_code".into(), vec!["usa", "XX", " uk ", "DE"]),
            Column::new(
                "account_type".into(),
                vec!["SAVING", "LOAN", "chkng", "UNKNOWN_TYPE"],
            ),
        ])
        .expect("build raw frame")
    }

    fn f64_at(df: &DataFrame, name: &str, idx: usize) -> f64 {
        match df.column(name).unwrap().get(idx).unwrap() {
            AnyValue::Float64(v) => v,
            other => panic!("expected f64, got {other:?}"),
        }
    }

    fn str_at(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
        match df.column(name).unwrap().get(idx).unwrap() {
            AnyValue::Null => None,
            AnyValue::String(s) => Some(s.to_string()),
            AnyValue::StringOwned(s) => Some(s.to_string()),
            other => panic!("expected string, got {other:?}"),
        }
    }

    fn bool_at(df: &DataFrame, name: &str, idx: usize) -> bool {
        match df.column(name).unwrap().get(idx).unwrap() {
            AnyValue::Boolean(b) => b,
            other => panic!("expected bool, got {other:?}"),
        }
    }

    fn column_names(df: &DataFrame) -> Vec<&str> {
        df.get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect()
    }

    #[test]
    fn projection_has_fixed_columns_in_order() {
        let out = normalize_records(&raw_frame()).expect("normalize");
        assert_eq!(column_names(&out), OUTPUT_COLUMNS);
        assert_eq!(out.height(), 4);
    }

    #[test]
    fn amount_is_never_absent() {
        let out = normalize_records(&raw_frame()).expect("normalize");
        assert_eq!(out.column("amount").unwrap().null_count(), 0);
        assert_eq!(f64_at(&out, "amount", 0), 0.0);
        assert_eq!(f64_at(&out, "amount", 1), 7500.5);
        assert_eq!(f64_at(&out, "amount", 2), 5000.0);
        assert_eq!(f64_at(&out, "amount", 3), 0.0);
    }

    #[test]
    fn description_null_sentinel_becomes_absent() {
        let out = normalize_records(&raw_frame()).expect("normalize");
        assert_eq!(str_at(&out, "description", 0), None);
        assert_eq!(
            str_at(&out, "description", 1),
            Some("Wire transfer".to_string())
        );
        // Other values keep their surrounding whitespace.
        assert_eq!(str_at(&out, "description", 2), Some("  Rent  ".to_string()));
        assert_eq!(str_at(&out, "description", 3), None);
    }

    #[test]
    fn enrichment_columns_are_derived_from_raw_values() {
        let out = normalize_records(&raw_frame()).expect("normalize");
        assert_eq!(
            str_at(&out, "country_name", 0),
            Some("United States".to_string())
        );
        assert_eq!(
            str_at(&out, "country_name", 1),
            Some("Other/Unknown".to_string())
        );
        assert_eq!(
            str_at(&out, "country_name", 2),
            Some("United Kingdom".to_string())
        );
        assert_eq!(str_at(&out, "country_name", 3), Some("Germany".to_string()));

        assert_eq!(
            str_at(&out, "account_type_standardized", 0),
            Some("Savings".to_string())
        );
        assert_eq!(
            str_at(&out, "account_type_standardized", 1),
            Some("Loan".to_string())
        );
        assert_eq!(
            str_at(&out, "account_type_standardized", 2),
            Some("Checking".to_string())
        );
        assert_eq!(
            str_at(&out, "account_type_standardized", 3),
            Some("Other".to_string())
        );
    }

    #[test]
    fn suspicion_flag_uses_normalized_amount() {
        let out = normalize_records(&raw_frame()).expect("normalize");
        assert!(!bool_at(&out, "is_suspicious", 0));
        assert!(bool_at(&out, "is_suspicious", 1));
        // Exactly at the threshold is not suspicious.
        assert!(!bool_at(&out, "is_suspicious", 2));
        assert!(!bool_at(&out, "is_suspicious", 3));
        assert_eq!(suspicious_count(&out).expect("count"), 1);
    }

    #[test]
    fn numeric_amount_column_is_accepted() {
        let mut df = raw_frame();
        df.with_column(Column::new(
            "amount".into(),
            vec![Some(12.5_f64), Some(9000.0), None, Some(-3.0)],
        ))
        .expect("replace amount");
        let out = normalize_records(&df).expect("normalize");
        assert_eq!(f64_at(&out, "amount", 0), 12.5);
        assert_eq!(f64_at(&out, "amount", 2), 0.0);
        assert_eq!(f64_at(&out, "amount", 3), -3.0);
        assert!(bool_at(&out, "is_suspicious", 1));
    }

    #[test]
    fn empty_frame_keeps_cardinality() {
        let empty = raw_frame().slice(0, 0);
        let out = normalize_records(&empty).expect("normalize");
        assert_eq!(out.height(), 0);
        assert_eq!(column_names(&out), OUTPUT_COLUMNS);
    }

    #[test]
    fn missing_column_is_fatal() {
        let df = raw_frame().drop("amount").expect("drop column");
        let err = normalize_records(&df).expect_err("schema mismatch");
        match err {
            TransformError::MissingColumn { column } => assert_eq!(column, "amount"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
