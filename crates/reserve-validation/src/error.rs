// File: src/error.rs
// Purpose: Configuration errors raised while building validators

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing rules, field validators or a form.
///
/// These signal a broken configuration. A value that fails a rule is not an
/// error; it is reported as `Some(message)`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rule `{kind}` has an empty error message")]
    EmptyMessage { kind: String },

    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("field `{0}` is registered more than once")]
    DuplicateField(String),

    #[error("failed to read form configuration {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize form configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
