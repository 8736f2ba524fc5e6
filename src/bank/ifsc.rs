//! IFSC routing code format.

use regex::Regex;
use std::sync::LazyLock;

/// Four letters, a literal zero, six alphanumerics.
static IFSC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC pattern is a valid regex")
});

/// Upper-case a code the way the form stores it.
pub fn normalize_ifsc(raw: &str) -> String {
    raw.to_uppercase()
}

/// Check a code against the IFSC format. Input is case-folded first.
pub fn is_valid_ifsc(code: &str) -> bool {
    IFSC_PATTERN.is_match(&normalize_ifsc(code))
}
