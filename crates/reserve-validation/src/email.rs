//! Email shape check
//!
//! This is a syntactic approximation, not RFC 5322 validation: one `@`,
//! no whitespace, and at least one dot in the domain with something after it.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Returns `true` when `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
