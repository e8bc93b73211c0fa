pub mod check;
pub mod config;
pub mod field;

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use reserve_validation::{FormConfig, FormValidator};
use serde_json::Value;

/// Configuration from `path`, or the built-in reservation form.
pub fn load_config(path: Option<&Path>) -> Result<FormConfig> {
    match path {
        Some(path) => FormConfig::load(path)
            .with_context(|| format!("Failed to load form configuration: {:?}", path)),
        None => FormConfig::reservation().context("Built-in reservation configuration is invalid"),
    }
}

pub fn load_form(path: Option<&Path>) -> Result<FormValidator> {
    load_config(path)?
        .build()
        .context("Form configuration is inconsistent")
}

/// Read a submission file, `-` meaning stdin.
pub fn read_submission(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read submission from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read submission file: {:?}", path))?
    };
    parse_submission(&content)
}

/// Parse a JSON object of submitted values.
///
/// Strings are taken as typed; numbers and booleans use their JSON text;
/// `null` leaves the field out of the submission, like an unchecked box.
pub fn parse_submission(content: &str) -> Result<BTreeMap<String, String>> {
    let value: Value = serde_json::from_str(content).context("Submission is not valid JSON")?;
    let Value::Object(entries) = value else {
        bail!("Submission must be a JSON object of field names to values");
    };

    let mut submission = BTreeMap::new();
    for (name, value) in entries {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                bail!("Field `{}` must be a string, number or boolean", name)
            }
        };
        submission.insert(name, value);
    }
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_submission() {
        let submission = parse_submission(
            r#"{"first": "Al", "quantity": 3, "policy": true, "location": null}"#,
        )
        .unwrap();
        assert_eq!(
            submission.into_iter().collect::<Vec<_>>(),
            vec![
                ("first".to_string(), "Al".to_string()),
                ("policy".to_string(), "true".to_string()),
                ("quantity".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_submission_rejects_nested_values() {
        assert!(parse_submission(r#"{"first": ["Al"]}"#).is_err());
        assert!(parse_submission(r#"["first"]"#).is_err());
        assert!(parse_submission("not json").is_err());
    }

    #[test]
    fn test_load_builtin_form() {
        let form = load_form(None).unwrap();
        assert_eq!(form.len(), 7);
    }
}
