//! Loose form-field validators.
//!
//! These gate obvious typos before a round trip; the server stays the source
//! of truth. Neither pattern is RFC-complete and neither normalizes input.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("phone pattern compiles")
});

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Optional `+`, optional parenthesized area code, then 3-3-(4..6) digits with
/// optional `-`, `.` or space separators.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}
