// scrumlint-core/src/infrastructure/mod.rs

pub mod catalog_loader;
pub mod csv_source;
pub mod error;
pub mod export;

// Re-exports
pub use catalog_loader::{load_catalog, load_catalog_or_default};
pub use csv_source::{CsvDatasetSource, dataset_from_reader};
pub use error::InfrastructureError;
pub use export::{write_dataset_csv, write_violations_csv};
