// File: src/config.rs
// Purpose: Static form configuration (field -> rules) loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::field::FieldValidator;
use crate::form::FormValidator;
use crate::rule::{Rule, RuleKind};

/// Built-in configuration of the reservation page.
const RESERVATION_TOML: &str = include_str!("../config/reservation.toml");

/// Form configuration: an ordered list of fields and their rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// Rules for a single field, evaluated in the listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule as written in the configuration file, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    Required { message: String },
    Email { message: String },
    MinLength { min: usize, message: String },
    Numeric { message: String },
}

impl RuleConfig {
    fn build(&self) -> Result<Rule> {
        match self {
            RuleConfig::Required { message } => Rule::new(RuleKind::Required, message.as_str()),
            RuleConfig::Email { message } => Rule::new(RuleKind::Email, message.as_str()),
            RuleConfig::MinLength { min, message } => {
                Rule::new(RuleKind::MinLength(*min), message.as_str())
            }
            RuleConfig::Numeric { message } => Rule::new(RuleKind::Numeric, message.as_str()),
        }
    }
}

impl From<&Rule> for RuleConfig {
    fn from(rule: &Rule) -> Self {
        let message = rule.message().to_string();
        match rule.kind() {
            RuleKind::Required => RuleConfig::Required { message },
            RuleKind::Email => RuleConfig::Email { message },
            RuleKind::MinLength(min) => RuleConfig::MinLength { min: *min, message },
            RuleKind::Numeric => RuleConfig::Numeric { message },
        }
    }
}

impl From<&FormValidator> for FormConfig {
    fn from(form: &FormValidator) -> Self {
        let fields = form
            .validators()
            .iter()
            .map(|validator| FieldConfig {
                name: validator.field_name().to_string(),
                rules: validator.rules().iter().map(RuleConfig::from).collect(),
            })
            .collect();
        Self { fields }
    }
}

impl FormConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file. A missing or unreadable file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = ?path, fields = config.fields.len(), "loaded form configuration");
        Ok(config)
    }

    /// The reservation page configuration bundled with the crate.
    pub fn reservation() -> Result<Self> {
        Self::from_toml(RESERVATION_TOML)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the validators. Rejects empty messages, blank and duplicate field names.
    pub fn build(&self) -> Result<FormValidator> {
        let validators = self
            .fields
            .iter()
            .map(|field| {
                let rules = field
                    .rules
                    .iter()
                    .map(RuleConfig::build)
                    .collect::<Result<Vec<_>>>()?;
                FieldValidator::new(field.name.as_str(), rules)
            })
            .collect::<Result<Vec<_>>>()?;
        FormValidator::new(validators)
    }
}

/// Validators for the reservation page.
pub fn reservation_form() -> Result<FormValidator> {
    FormConfig::reservation()?.build()
}
