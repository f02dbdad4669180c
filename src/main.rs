use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use employee_roster::config::RosterLoader;
use employee_roster::roster::sample_roster;

#[derive(Parser)]
#[command(name = "employee-roster")]
#[command(about = "Print employee records by role", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a YAML roster file (defaults to the built-in sample roster)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (warn).
    // Logs go to stderr; stdout carries the report.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let roster = match &cli.roster {
        Some(path) => RosterLoader::load(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?
            .build(),
        None => sample_roster(),
    };

    let (roster, warnings) = roster.into_parts();

    for entry in roster.entries() {
        let employee = entry.record().employee();
        debug!(
            heading = %entry.heading(),
            employee_number = employee.employee_number(),
            hire_date = ?employee.parsed_hire_date(),
            "Rendering record"
        );
    }

    match cli.format {
        OutputFormat::Text => {
            // Corrections are reported inline, ahead of the report.
            for warning in &warnings {
                println!("{}", warning);
            }
            print!("{}", roster.render());
        }
        OutputFormat::Json => {
            for warning in &warnings {
                warn!(
                    field = %warning.field,
                    attempted = %warning.attempted,
                    applied = %warning.applied,
                    "{}",
                    warning
                );
            }
            println!("{}", roster.to_json()?);
        }
    }

    Ok(())
}
