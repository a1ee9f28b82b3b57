// scrumlint/src/commands/scan.rs
//
// USE CASE: scan a backlog export against the rule catalog and render the
// remediation report. All decision logic lives in scrumlint-core; this
// file is presentation glue.

use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::fs::File;
use std::path::PathBuf;

use scrumlint_core::application::analyze;
use scrumlint_core::domain::Violation;
use scrumlint_core::domain::engine::coerce;
use scrumlint_core::infrastructure::{
    CsvDatasetSource, load_catalog_or_default, write_violations_csv,
};
use scrumlint_core::ports::DatasetSource;

/// Returns the number of violations found so main can set the exit code.
pub fn execute(
    data: PathBuf,
    rules: Option<PathBuf>,
    output: Option<PathBuf>,
    as_of: Option<String>,
) -> anyhow::Result<usize> {
    let now = resolve_clock(as_of.as_deref())?;

    println!("⚙️  Loading rule catalog...");
    let catalog = load_catalog_or_default(rules.as_deref());
    println!("   {} rules active.", catalog.len());

    let source = CsvDatasetSource::new(&data);
    let dataset = source.load()?;
    println!("📦 {} items loaded from {}", dataset.len(), data.display());

    let report = analyze(&dataset, &catalog, now);

    if report.violations.is_empty() {
        println!("\n🎉 No anti-patterns detected in this dataset.");
    } else {
        println!("\n🚨 Found {} violations\n", report.summary.total_violations);
        println!("{}", render_table(&report.violations));
        println!("\n   Agile Health Score: {}/100", report.summary.health_score);
        println!("   Anti-patterns hit:  {}", report.summary.rules_violated);
        println!("   Critical (High):    {}", report.summary.high_severity);
    }

    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("Could not create report file at {}", path.display()))?;
        write_violations_csv(&report.violations, file)?;
        println!("\n📥 Remediation report written to {}", path.display());
    }

    Ok(report.summary.total_violations)
}

fn resolve_clock(as_of: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match as_of {
        None => Ok(Utc::now().naive_utc()),
        Some(text) => coerce::parse_date(text)
            .with_context(|| format!("Could not parse --as-of value '{}'", text)),
    }
}

fn render_table(violations: &[Violation]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(200) // stable layout when stdout is not a terminal (CI)
        .set_header(vec![
            "Issue Key",
            "Summary",
            "Anti-Pattern",
            "Severity",
            "Remedy",
        ]);

    for violation in violations {
        table.add_row(vec![
            violation.issue_key.as_str(),
            violation.summary.as_str(),
            violation.rule_name.as_str(),
            violation.severity.as_str(),
            violation.remedy.as_str(),
        ]);
    }

    table
}
