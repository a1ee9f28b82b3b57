// scrumlint/src/main.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "scrumlint")]
#[command(about = "Backlog anti-pattern scanner for agile work-tracking exports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 🔍 Scans a backlog export against the rule catalog
    Scan {
        /// Backlog data: CSV export with a header row
        #[arg(long)]
        data: PathBuf,

        /// Rule catalog (JSON or YAML). Built-in rules when omitted or unreadable
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Write the remediation report to this CSV file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Reference clock for day-offset rules (ex: "2025-11-20"). Defaults to now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// 📋 Lists the rules in the active catalog
    Rules {
        /// Rule catalog (JSON or YAML). Built-in rules when omitted
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// 🧪 Writes a five-item demo backlog CSV
    Sample {
        #[arg(long, short, default_value = "sample_backlog.csv")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug scrumlint scan ... to see which rules were skipped and why
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: SCAN BACKLOG ---
        Commands::Scan {
            data,
            rules,
            output,
            as_of,
        } => {
            let violation_count = commands::scan::execute(data, rules, output, as_of)?;
            if violation_count > 0 {
                // Exit with error code for CI/CD
                std::process::exit(1);
            }
        }

        // --- USE CASE: LIST RULES ---
        Commands::Rules { rules } => commands::rules::execute(rules)?,

        // --- USE CASE: DEMO DATA ---
        Commands::Sample { output } => commands::sample::execute(output)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan_defaults() {
        let args = Cli::parse_from(["scrumlint", "scan", "--data", "backlog.csv"]);
        match args.command {
            Commands::Scan {
                data,
                rules,
                output,
                as_of,
            } => {
                assert_eq!(data.to_string_lossy(), "backlog.csv");
                assert_eq!(rules, None);
                assert_eq!(output, None);
                assert_eq!(as_of, None);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_parse_scan_full() {
        let args = Cli::parse_from([
            "scrumlint",
            "scan",
            "--data",
            "backlog.csv",
            "--rules",
            "rules.json",
            "--output",
            "report.csv",
            "--as-of",
            "2025-11-20",
        ]);
        match args.command {
            Commands::Scan { rules, as_of, .. } => {
                assert_eq!(rules, Some(PathBuf::from("rules.json")));
                assert_eq!(as_of, Some("2025-11-20".to_string()));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_parse_sample_default_output() {
        let args = Cli::parse_from(["scrumlint", "sample"]);
        match args.command {
            Commands::Sample { output } => {
                assert_eq!(output.to_string_lossy(), "sample_backlog.csv");
            }
            _ => panic!("Expected Sample command"),
        }
    }
}
