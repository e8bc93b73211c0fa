mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "reserve")]
#[command(version, about = "Validate reservation form submissions", long_about = None)]
struct Cli {
    /// Form configuration (TOML). Defaults to the built-in reservation form
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a whole submission
    Check {
        /// JSON object of field names to values, `-` for stdin
        data: PathBuf,

        /// Also report fields without validators and validators without fields
        #[arg(long)]
        strict: bool,
    },

    /// Validate a single field value
    Field {
        /// Field name
        name: String,

        /// Field value; omitted means the field is absent
        value: Option<String>,
    },

    /// Print the effective form configuration
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let valid = match cli.command {
        Commands::Check { data, strict } => commands::check::execute(config, &data, strict)?,
        Commands::Field { name, value } => {
            commands::field::execute(config, &name, value.as_deref())?
        }
        Commands::Config => commands::config::execute(config)?,
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
