//! Fixed lookup tables for transaction enrichment.
//!
//! Both lookups are total: every input maps to exactly one label, with a
//! catch-all for anything outside the known variants. Keys are compared
//! after trimming and uppercasing, so `" usa "` and `"USA"` resolve the
//! same way.

/// Label for country codes outside the known set.
pub const OTHER_COUNTRY: &str = "Other/Unknown";

/// Label for account types outside the known set.
pub const OTHER_ACCOUNT_TYPE: &str = "Other";

/// Amounts strictly above this are flagged as suspicious.
pub const SUSPICIOUS_AMOUNT_THRESHOLD: f64 = 5000.0;

/// Known country-code variants and the name each set maps to.
const COUNTRY_NAMES: &[(&[&str], &str)] = &[
    (&["US", "USA"], "United States"),
    (&["GB", "UK"], "United Kingdom"),
    (&["DEU", "DE", "GERMANY"], "Germany"),
    (&["IN", "IND", "INDIA"], "India"),
    (&["CA"], "Canada"),
    (&["AUS"], "Australia"),
];

/// Known account-type variants and the standardized label for each.
/// "CHEKING" and "CHKNG" are spellings observed in the raw feed; they are
/// matched verbatim, not corrected.
const ACCOUNT_TYPES: &[(&[&str], &str)] = &[
    (&["SAVING", "SAVINGS"], "Savings"),
    (&["CHEKING", "CHECKING", "CHKNG"], "Checking"),
    (&["CURRENT"], "Current"),
    (&["CREDITCARD"], "Credit Card"),
    (&["LOAN"], "Loan"),
];

fn lookup(table: &[(&[&str], &'static str)], raw: &str, fallback: &'static str) -> &'static str {
    let key = raw.trim().to_uppercase();
    for &(variants, label) in table {
        if variants.contains(&key.as_str()) {
            return label;
        }
    }
    fallback
}

/// Map a raw country code to its display name.
///
/// # Examples
///
/// ```
/// use txn_model::reference::country_name;
///
/// assert_eq!(country_name("usa"), "United States");
/// assert_eq!(country_name(" uk "), "United Kingdom");
/// assert_eq!(country_name("XX"), "Other/Unknown");
/// ```
pub fn country_name(code: &str) -> &'static str {
    lookup(COUNTRY_NAMES, code, OTHER_COUNTRY)
}

/// Map a raw account type to its standardized label.
///
/// # Examples
///
/// ```
/// use txn_model::reference::account_type_standardized;
///
/// assert_eq!(account_type_standardized("SAVING"), "Savings");
/// assert_eq!(account_type_standardized("cheking"), "Checking");
/// assert_eq!(account_type_standardized("UNKNOWN_TYPE"), "Other");
/// ```
pub fn account_type_standardized(raw: &str) -> &'static str {
    lookup(ACCOUNT_TYPES, raw, OTHER_ACCOUNT_TYPE)
}
