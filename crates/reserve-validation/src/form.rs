// File: src/form.rs
// Purpose: Whole-form coordinator answering live field checks and submit checks

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::field::{FieldValidator, ValidationOutcome};

/// Where submitted values come from.
///
/// The coordinator never looks values up itself; the caller hands it the
/// submitted data. `None` means the field is absent from the submission.
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<&str, &str, S> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<&str, &str> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Pairs in submission order; the last pair with a matching name wins.
impl FieldSource for [(&str, &str)] {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.iter()
            .rfind(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> FieldSource for [(&str, &str); N] {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.as_slice().field_value(name)
    }
}

/// Outcome for one field of a submit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub field: String,
    pub error: ValidationOutcome,
}

/// Result of validating every registered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    /// One entry per registered field, in registration order.
    pub fields: Vec<FieldReport>,
    /// `true` iff every entry has no error.
    pub all_valid: bool,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.all_valid
    }

    /// Error for `field`, `None` when it passed or is not registered.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|report| report.field == field)
            .and_then(|report| report.error.as_deref())
    }

    /// Failing fields with their messages, in registration order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|report| {
            report
                .error
                .as_deref()
                .map(|message| (report.field.as_str(), message))
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Holds every field validator of a form, keyed by unique field name.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    validators: Vec<FieldValidator>,
}

impl FormValidator {
    /// Registers validators in the given order. Field names must be unique.
    pub fn new(validators: Vec<FieldValidator>) -> Result<Self> {
        let mut seen = HashSet::new();
        for validator in &validators {
            if !seen.insert(validator.field_name()) {
                return Err(ConfigError::DuplicateField(
                    validator.field_name().to_string(),
                ));
            }
        }
        Ok(Self { validators })
    }

    /// Live check of a single field.
    ///
    /// Returns `None` when no validator is registered for `field`: the
    /// lookup miss is a silent no-op, not an error.
    pub fn validate_field(&self, field: &str, value: Option<&str>) -> Option<ValidationOutcome> {
        match self.get(field) {
            Some(validator) => Some(validator.validate(value)),
            None => {
                tracing::debug!(field, "no validator registered, skipping");
                None
            }
        }
    }

    /// Submit check: evaluates every registered field against `source`.
    pub fn validate_all<S>(&self, source: &S) -> FormReport
    where
        S: FieldSource + ?Sized,
    {
        let fields: Vec<FieldReport> = self
            .validators
            .iter()
            .map(|validator| FieldReport {
                field: validator.field_name().to_string(),
                error: validator.validate(source.field_value(validator.field_name())),
            })
            .collect();
        let all_valid = fields.iter().all(|report| report.error.is_none());

        tracing::trace!(fields = fields.len(), all_valid, "validated form");

        FormReport { fields, all_valid }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValidator> {
        self.validators
            .iter()
            .find(|validator| validator.field_name() == field)
    }

    /// Registered field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.validators.iter().map(FieldValidator::field_name)
    }

    pub fn validators(&self) -> &[FieldValidator] {
        &self.validators
    }

    /// Names presented by the page that have no validator.
    ///
    /// Diagnostics only; [`validate_field`](Self::validate_field) still
    /// treats these as silent no-ops.
    pub fn unregistered_fields<'a, I>(&self, presented: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        presented
            .into_iter()
            .filter(|name| self.get(name).is_none())
            .collect()
    }

    /// Registered fields the page does not present.
    pub fn missing_fields<'a, I>(&self, presented: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let presented: HashSet<&str> = presented.into_iter().collect();
        self.field_names()
            .filter(|name| !presented.contains(*name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn form() -> FormValidator {
        FormValidator::new(vec![
            FieldValidator::new("name", vec![Rule::min_length(2, "min 2").unwrap()]).unwrap(),
            FieldValidator::new("age", vec![Rule::numeric("number").unwrap()]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_validate_field_known() {
        let form = form();
        assert_eq!(form.validate_field("name", Some("a")), Some(Some("min 2".to_string())));
        assert_eq!(form.validate_field("name", Some("ab")), Some(None));
    }

    #[test]
    fn test_validate_field_unknown_is_noop() {
        assert_eq!(form().validate_field("nickname", Some("")), None);
    }

    #[test]
    fn test_validate_all_with_missing_key() {
        let report = form().validate_all(&[("name", "Al")]);
        assert!(!report.is_valid());
        assert_eq!(report.error("name"), None);
        assert_eq!(report.error("age"), Some("number"));
    }

    #[test]
    fn test_slice_source_last_pair_wins() {
        let pairs = [("age", "x"), ("age", "3")];
        assert_eq!(pairs.field_value("age"), Some("3"));
        assert_eq!(pairs[..].field_value("age"), Some("3"));
        assert_eq!(pairs.field_value("name"), None);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = FormValidator::new(vec![
            FieldValidator::new("name", Vec::new()).unwrap(),
            FieldValidator::new("name", Vec::new()).unwrap(),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateField(name)) if name == "name"));
    }

    #[test]
    fn test_empty_form_is_valid() {
        let form = FormValidator::default();
        let report = form.validate_all(&HashMap::<String, String>::new());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_diagnostics() {
        let form = form();
        assert_eq!(form.unregistered_fields(["name", "email"]), vec!["email"]);
        assert_eq!(form.missing_fields(["name", "email"]), vec!["age"]);
    }
}
