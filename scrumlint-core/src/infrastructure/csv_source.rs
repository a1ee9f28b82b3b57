// scrumlint-core/src/infrastructure/csv_source.rs

use crate::domain::dataset::{CellValue, Dataset};
use crate::error::ScrumlintError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::source::DatasetSource;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Dataset adapter for Jira/ADO style CSV exports: a header row names the
/// columns, every cell loads as raw text. All typing (dates, numbers) is
/// the engine's job.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<Dataset, ScrumlintError> {
        let file = File::open(&self.path).map_err(InfrastructureError::Io)?;
        let dataset = dataset_from_reader(file)?;
        info!(path = ?self.path, rows = dataset.len(), "Backlog data loaded");
        Ok(dataset)
    }
}

pub fn dataset_from_reader<R: Read>(reader: R) -> Result<Dataset, ScrumlintError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(InfrastructureError::from)?.clone();
    let mut dataset = Dataset::new(headers.iter())?;

    for record in csv_reader.records() {
        let record = record.map_err(InfrastructureError::from)?;
        let cells = record
            .iter()
            .map(|field| CellValue::Text(field.to_string()))
            .collect();
        dataset.push_row(cells)?;
    }

    Ok(dataset)
}
