use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use reserve_validation::FormReport;

use super::{load_form, read_submission};

/// Returns `true` when every field passes.
pub fn execute(config: Option<&Path>, data: &Path, strict: bool) -> Result<bool> {
    let form = load_form(config)?;
    let submission = read_submission(data)?;
    tracing::info!(fields = submission.len(), "checking submission");

    let report = form.validate_all(&submission);
    print_report(&report);

    if strict {
        for name in form.unregistered_fields(submission.keys().map(String::as_str)) {
            println!("{} {} has no validator", "warning:".yellow().bold(), name.cyan());
        }
        for name in form.missing_fields(submission.keys().map(String::as_str)) {
            println!(
                "{} {} is validated but was not submitted",
                "warning:".yellow().bold(),
                name.cyan()
            );
        }
    }

    println!();
    if report.is_valid() {
        println!("{}", "✓ Submission is valid".green().bold());
    } else {
        let count = report.errors().count();
        println!(
            "{}",
            format!("✗ {} of {} fields invalid", count, report.len()).red().bold()
        );
    }

    Ok(report.is_valid())
}

fn print_report(report: &FormReport) {
    let width = report
        .fields
        .iter()
        .map(|field| field.field.len())
        .max()
        .unwrap_or(0);

    for field in &report.fields {
        match &field.error {
            None => println!("  {:width$}  {}", field.field, "ok".green(), width = width),
            Some(message) => println!(
                "  {:width$}  {}",
                field.field,
                message.red(),
                width = width
            ),
        }
    }
}
