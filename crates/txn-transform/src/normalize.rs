//! Per-value normalization rules.
//!
//! Each rule is a pure function over a single raw value. The frame-level
//! pipeline in [`crate::pipeline`] applies them uniformly across rows; no
//! rule depends on any other row.

use polars::prelude::AnyValue;

use txn_ingest::any_to_f64;
use txn_model::SUSPICIOUS_AMOUNT_THRESHOLD;

/// Normalize a raw amount value to a number.
///
/// Null and unparseable values carry no numeric information and default to
/// 0.0. Never fails.
pub fn normalize_amount(value: &AnyValue<'_>) -> f64 {
    any_to_f64(value).unwrap_or(0.0)
}

/// Cleanse a description value.
///
/// A value equal to the literal text `NULL` after trimming, compared
/// case-insensitively, marks an absent description. Anything else passes
/// through unchanged, surrounding whitespace included.
///
/// # Examples
///
/// ```
/// use txn_transform::normalize::cleanse_description;
///
/// assert_eq!(cleanse_description(" null "), None);
/// assert_eq!(cleanse_description("NULL"), None);
/// assert_eq!(cleanse_description(" Wire transfer "), Some(" Wire transfer "));
/// ```
pub fn cleanse_description(raw: &str) -> Option<&str> {
    if raw.trim().eq_ignore_ascii_case("NULL") {
        None
    } else {
        Some(raw)
    }
}

/// Flag a transaction as suspicious.
///
/// Applies to the normalized amount; exactly at the threshold is not
/// suspicious.
pub fn is_suspicious(amount: f64) -> bool {
    amount > SUSPICIOUS_AMOUNT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_defaults_for_null_and_garbage() {
        assert_eq!(normalize_amount(&AnyValue::Null), 0.0);
        assert_eq!(normalize_amount(&AnyValue::String("NULL")), 0.0);
        assert_eq!(normalize_amount(&AnyValue::String("not a number")), 0.0);
    }

    #[test]
    fn amount_parses_numeric_forms() {
        assert_eq!(normalize_amount(&AnyValue::Float64(7500.5)), 7500.5);
        assert_eq!(normalize_amount(&AnyValue::Int64(-25)), -25.0);
        assert_eq!(normalize_amount(&AnyValue::String(" 7500.50 ")), 7500.5);
    }

    #[test]
    fn description_null_variants_become_absent() {
        for raw in ["NULL", "null", " Null ", "\tNULL\n"] {
            assert_eq!(cleanse_description(raw), None);
        }
    }

    #[test]
    fn description_other_values_pass_through_untrimmed() {
        assert_eq!(cleanse_description("  padded  "), Some("  padded  "));
        assert_eq!(cleanse_description(""), Some(""));
        assert_eq!(cleanse_description("NULLS"), Some("NULLS"));
    }

    #[test]
    fn suspicion_boundary_is_exclusive() {
        assert!(!is_suspicious(5000.0));
        assert!(is_suspicious(5000.01));
        assert!(!is_suspicious(0.0));
        assert!(!is_suspicious(-6000.0));
    }
}
