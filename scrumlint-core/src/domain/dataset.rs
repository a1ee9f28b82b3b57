// scrumlint-core/src/domain/dataset.rs

use crate::domain::error::DomainError;
use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::collections::HashMap;

/// One cell of a backlog export. The source gives no type guarantee beyond
/// "some scalar or missing"; the engine performs its own coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

static MISSING_CELL: CellValue = CellValue::Missing;

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Renders the cell to its string form. `Missing` has no string form.
    /// Whole numbers render without a fractional part so that a CSV cell
    /// round-trips as the text a human wrote ("13", not "13.0").
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Missing => None,
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    Some(Cow::Owned(format!("{}", *n as i64)))
                } else {
                    Some(Cow::Owned(n.to_string()))
                }
            }
            CellValue::Date(d) => Some(Cow::Owned(d.format("%Y-%m-%d %H:%M:%S").to_string())),
        }
    }

    /// True for null cells and for text that trims to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// An ordered sequence of rows over a dataset-wide column set.
///
/// Column presence is all-or-nothing: either every row has a column or no
/// row does. `push_row` enforces the arity so the invariant holds by
/// construction. Row order is preserved from source to violation output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new<I, S>(columns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(DomainError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            columns,
            index,
            rows: Vec::new(),
        })
    }

    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<(), DomainError> {
        if cells.len() != self.columns.len() {
            return Err(DomainError::RowArityMismatch {
                row_index: self.rows.len(),
                expected: self.columns.len(),
                got: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by position. Out-of-range reads behave as a missing
    /// cell, which is what every operator wants for absent data.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&MISSING_CELL)
    }

    pub fn cell_by_name(&self, row: usize, name: &str) -> &CellValue {
        match self.column_index(name) {
            Some(col) => self.cell(row, col),
            None => &MISSING_CELL,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
