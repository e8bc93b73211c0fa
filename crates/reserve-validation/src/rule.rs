// File: src/rule.rs
// Purpose: Validation rules, a closed set of checks each carrying its failure message

use std::fmt;

use crate::error::{ConfigError, Result};
use crate::{email, numeric};

/// The check a [`Rule`] performs.
///
/// Every variant is concrete: there is no "base" rule to forget to override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Present and not blank after trimming surrounding whitespace.
    Required,
    /// Shaped like `local@domain.tld`, see [`email::is_valid_email`].
    Email,
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
    /// Coerces to a number, see [`numeric::is_numeric`].
    Numeric,
}

impl RuleKind {
    /// Runs the check. `None` is an absent value and fails every kind.
    pub fn check(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            RuleKind::Required => !numeric::trim_js(value).is_empty(),
            RuleKind::Email => email::is_valid_email(value),
            RuleKind::MinLength(min) => value.chars().count() >= *min,
            RuleKind::Numeric => numeric::is_numeric(value),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Required => f.write_str("required"),
            RuleKind::Email => f.write_str("email"),
            RuleKind::MinLength(min) => write!(f, "min_length({})", min),
            RuleKind::Numeric => f.write_str("numeric"),
        }
    }
}

/// A single immutable check with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    kind: RuleKind,
    message: String,
}

impl Rule {
    /// Builds a rule. The message must contain something other than whitespace.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage {
                kind: kind.to_string(),
            });
        }
        Ok(Self { kind, message })
    }

    pub fn required(message: impl Into<String>) -> Result<Self> {
        Self::new(RuleKind::Required, message)
    }

    pub fn email(message: impl Into<String>) -> Result<Self> {
        Self::new(RuleKind::Email, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Result<Self> {
        Self::new(RuleKind::MinLength(min), message)
    }

    pub fn numeric(message: impl Into<String>) -> Result<Self> {
        Self::new(RuleKind::Numeric, message)
    }

    /// `true` when `value` passes this rule.
    pub fn validate(&self, value: Option<&str>) -> bool {
        self.kind.check(value)
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The failure message, returned verbatim by the owning field validator.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rule() {
        let rule = Rule::required("required").unwrap();
        assert!(!rule.validate(Some("   ")));
        assert!(!rule.validate(Some("")));
        assert!(rule.validate(Some(" x ")));
        assert!(!rule.validate(None));
        assert!(!rule.validate(Some("\u{FEFF}")));
    }

    #[test]
    fn test_email_rule() {
        let rule = Rule::email("email").unwrap();
        assert!(rule.validate(Some("a@b.com")));
        assert!(!rule.validate(Some("a@b")));
        assert!(!rule.validate(Some("a b@c.com")));
        assert!(!rule.validate(None));
    }

    #[test]
    fn test_min_length_rule() {
        let rule = Rule::min_length(2, "min 2").unwrap();
        assert!(!rule.validate(Some("a")));
        assert!(rule.validate(Some("ab")));
        assert!(!rule.validate(Some("")));
        assert!(!rule.validate(None));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::min_length(2, "min 2").unwrap();
        assert!(!rule.validate(Some("é")));
        assert!(rule.validate(Some("Éa")));
        // Whitespace counts, only Required trims
        assert!(rule.validate(Some("  ")));
    }

    #[test]
    fn test_min_length_zero_accepts_empty() {
        let rule = Rule::min_length(0, "never").unwrap();
        assert!(rule.validate(Some("")));
    }

    #[test]
    fn test_numeric_rule() {
        let rule = Rule::numeric("numeric").unwrap();
        assert!(rule.validate(Some("42")));
        assert!(rule.validate(Some("3.14")));
        assert!(!rule.validate(Some("4a2")));
        assert!(!rule.validate(Some("abc")));
        assert!(!rule.validate(Some("")));
        assert!(!rule.validate(Some(" ")));
        assert!(!rule.validate(None));
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let err = Rule::min_length(2, "  ").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMessage { ref kind } if kind == "min_length(2)"));
        assert!(Rule::required("").is_err());
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let rule = Rule::numeric(" must be a number ").unwrap();
        assert_eq!(rule.message(), " must be a number ");
        assert_eq!(rule.kind(), &RuleKind::Numeric);
    }
}
