// scrumlint-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Row {row_index} has {got} cells but the dataset declares {expected} columns")]
    #[diagnostic(
        code(scrumlint::domain::row_arity),
        help("Every row must carry exactly one cell per declared column.")
    )]
    RowArityMismatch {
        row_index: usize,
        expected: usize,
        got: usize,
    },

    #[error("Duplicate column name '{0}' in dataset header")]
    #[diagnostic(code(scrumlint::domain::duplicate_column))]
    DuplicateColumn(String),
}
