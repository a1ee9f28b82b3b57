// scrumlint-core/src/ports/source.rs

// This file defines what the application needs, without knowing how it's
// done. The engine only ever sees a fully materialized in-memory Dataset;
// where the rows come from (CSV file, generated fixture, another tool's
// export) is the adapter's business.

use crate::domain::dataset::Dataset;
use crate::error::ScrumlintError;

pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Dataset, ScrumlintError>;
}
