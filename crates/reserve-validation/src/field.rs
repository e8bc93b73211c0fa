// File: src/field.rs
// Purpose: Ordered rules bound to one form field, first failure wins

use crate::error::{ConfigError, Result};
use crate::rule::Rule;

/// `None` when the value is valid, otherwise the message of the first failing rule.
pub type ValidationOutcome = Option<String>;

/// Binds a field name to an ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidator {
    field_name: String,
    rules: Vec<Rule>,
}

impl FieldValidator {
    pub fn new(field_name: impl Into<String>, rules: Vec<Rule>) -> Result<Self> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        Ok(Self { field_name, rules })
    }

    /// Evaluates the rules in order and stops at the first one that fails.
    ///
    /// Rules after the failing one are never run. An empty rule list accepts
    /// every value, absent values included.
    pub fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        self.rules
            .iter()
            .find(|rule| !rule.validate(value))
            .map(|rule| rule.message().to_string())
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
