// scrumlint-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(scrumlint::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- RULE CATALOG (structure) ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(scrumlint::infra::json),
        help("Check the rule file: top-level 'anti_patterns' list, required keys per rule.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(scrumlint::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Rule catalog not found at '{0}'")]
    #[diagnostic(code(scrumlint::infra::catalog_missing))]
    CatalogNotFound(String),

    #[error("Unsupported rule catalog format '.{0}' (expected .json, .yaml or .yml)")]
    #[diagnostic(code(scrumlint::infra::catalog_format))]
    UnsupportedFormat(String),

    // --- DATASET / EXPORT (CSV) ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(scrumlint::infra::csv),
        help("Check the export has a header row and a stable column count.")
    )]
    CsvError(#[from] csv::Error),
}
