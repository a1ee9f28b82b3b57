pub mod catalog;
pub mod dataset;
pub mod engine;
pub mod error;

// Practical re-exports to shorten imports elsewhere
pub use catalog::{DetectionLogic, OperatorKind, Rule, RuleCatalog, Severity, Threshold};
pub use dataset::{CellValue, Dataset};
pub use engine::{EngineSettings, RuleEngine, Violation, evaluate};
pub use error::DomainError;
