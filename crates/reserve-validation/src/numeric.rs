//! Numeric coercion check
//!
//! Mirrors how a browser converts a form string with `Number(value)`, with one
//! deliberate difference: an empty or whitespace-only string is *not* a
//! number (the browser would coerce it to `0`).
//!
//! Accepted after trimming surrounding whitespace (the browser's set, see
//! [`trim_js`]):
//! - decimal literals: `42`, `-3.14`, `.5`, `5.`, `1e3`, `+2.5E-4`
//! - `Infinity`, `+Infinity`, `-Infinity`
//! - unsigned radix literals: `0x1F`, `0o17`, `0b101`
//!
//! Rejected: `nan`, `inf`, digit separators (`1_000`, `1,5`) and anything
//! with trailing garbage (`4a2`).

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern compiles")
});

/// Returns `true` when `value` coerces to a number.
pub fn is_numeric(value: &str) -> bool {
    let value = trim_js(value);
    if value.is_empty() {
        return false;
    }

    if matches!(value, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }

    if let Some(valid) = radix_literal(value) {
        return valid;
    }

    DECIMAL_REGEX.is_match(value)
}

/// Trims what a browser's `String.prototype.trim` strips: Unicode spaces,
/// line terminators and U+FEFF, but not U+0085.
pub fn trim_js(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// `Some(valid)` when `value` carries a `0x`/`0o`/`0b` prefix.
fn radix_literal(value: &str) -> Option<bool> {
    let bytes = value.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &value[2..];
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_numbers() {
        assert!(is_numeric("42"));
        assert!(is_numeric("3.14"));
        assert!(is_numeric("-7"));
        assert!(is_numeric("+7"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("5."));
        assert!(is_numeric("1e3"));
        assert!(is_numeric("2.5E-4"));
        assert!(is_numeric("  12  "));
    }

    #[test]
    fn test_empty_and_blank_are_rejected() {
        assert!(!is_numeric(""));
        assert!(!is_numeric(" "));
        assert!(!is_numeric("\t\n"));
    }

    #[test]
    fn test_non_numeric_text() {
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("4a2"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("1e"));
        assert!(!is_numeric("1_000"));
        assert!(!is_numeric("1,5"));
        assert!(!is_numeric("nan"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_browser_whitespace_is_trimmed() {
        assert!(is_numeric("\u{FEFF}42"));
        assert!(is_numeric("\u{A0}7\u{2028}"));
        assert!(!is_numeric("\u{FEFF}"));
        assert!(!is_numeric("\u{85}42"));
        assert_eq!(trim_js("\u{FEFF} x \u{3000}"), "x");
    }

    #[test]
    fn test_infinity() {
        assert!(is_numeric("Infinity"));
        assert!(is_numeric("-Infinity"));
        assert!(!is_numeric("infinity"));
    }

    #[test]
    fn test_radix_literals() {
        assert!(is_numeric("0x1F"));
        assert!(is_numeric("0XfF"));
        assert!(is_numeric("0o17"));
        assert!(is_numeric("0b101"));
        assert!(!is_numeric("0x"));
        assert!(!is_numeric("0b102"));
        assert!(!is_numeric("-0x10"));
        assert!(is_numeric("007"));
    }
}
