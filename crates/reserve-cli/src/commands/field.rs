use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load_form;

/// Returns `false` only when the field has a validator and the value fails it.
pub fn execute(config: Option<&Path>, name: &str, value: Option<&str>) -> Result<bool> {
    let form = load_form(config)?;

    match form.validate_field(name, value) {
        Some(None) => {
            println!("{} {}", name.cyan(), "ok".green());
            Ok(true)
        }
        Some(Some(message)) => {
            println!("{} {}", name.cyan(), message.red());
            Ok(false)
        }
        None => {
            println!("{} {}", name.cyan(), "no validator (ignored)".dimmed());
            Ok(true)
        }
    }
}
