// scrumlint-core/src/domain/engine/coerce.rs
//
// Per-cell "parse or mark missing" semantics. A value the operator cannot
// read as the type it needs is excluded from matching, never an error.

use crate::domain::dataset::CellValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats carrying a time of day, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%b/%y %H:%M", // Jira CSV export style: 21/Nov/25 14:02
];

/// Date-only formats; midnight is assumed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%b/%Y", "%d %b %Y"];

pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

pub fn cell_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_date(s),
        CellValue::Missing | CellValue::Number(_) => None,
    }
}

pub fn cell_number(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Missing | CellValue::Date(_) => None,
    };
    value.filter(|n| n.is_finite())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
