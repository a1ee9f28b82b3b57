// scrumlint-core/src/application/mod.rs

pub mod analysis;
pub mod sample;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use scrumlint_core::application::{analyze, AnalysisReport};`
// without knowing the internal file layout.

pub use analysis::{AnalysisReport, AnalysisSummary, analyze, analyze_with_settings};
pub use sample::sample_dataset;
