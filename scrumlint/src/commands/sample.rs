// scrumlint/src/commands/sample.rs
//
// USE CASE: write the demo backlog so users can try a scan without a
// real Jira/ADO export at hand.

use anyhow::Context;
use chrono::Utc;
use scrumlint_core::application::sample_dataset;
use scrumlint_core::infrastructure::write_dataset_csv;
use std::fs::File;
use std::path::PathBuf;

pub fn execute(output: PathBuf) -> anyhow::Result<()> {
    let dataset = sample_dataset(Utc::now().naive_utc())?;

    let file = File::create(&output)
        .with_context(|| format!("Could not create sample file at {}", output.display()))?;
    write_dataset_csv(&dataset, file)?;

    println!(
        "✨ Sample backlog with {} items written to {}",
        dataset.len(),
        output.display()
    );
    Ok(())
}
