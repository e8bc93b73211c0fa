use std::path::Path;

use anyhow::{Context, Result};

use super::load_config;

pub fn execute(config: Option<&Path>) -> Result<bool> {
    let config = load_config(config)?;
    // Build once so an inconsistent file is reported, not printed
    config.build().context("Form configuration is inconsistent")?;
    print!("{}", config.to_toml().context("Failed to render configuration")?);
    Ok(true)
}
