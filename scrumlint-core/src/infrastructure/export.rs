// scrumlint-core/src/infrastructure/export.rs

use crate::domain::dataset::Dataset;
use crate::domain::engine::Violation;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;

/// Column order of the remediation report, matching the serde names on
/// `Violation`. Written explicitly when there is no violation to infer a
/// header from: consumers always get a header row.
const EXPORT_HEADER: [&str; 8] = [
    "Issue Key",
    "Summary",
    "Anti-Pattern Detected",
    "Category",
    "Severity",
    "Reason",
    "Remedy Recommendation",
    "Rule Id",
];

/// Serializes violations as delimited text, one row per violation, in the
/// order the engine emitted them.
pub fn write_violations_csv<W: Write>(
    violations: &[Violation],
    writer: W,
) -> Result<(), InfrastructureError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if violations.is_empty() {
        csv_writer.write_record(EXPORT_HEADER)?;
    }
    for violation in violations {
        csv_writer.serialize(violation)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes a dataset back out as delimited text. Missing cells render as
/// empty fields (CSV has no null).
pub fn write_dataset_csv<W: Write>(
    dataset: &Dataset,
    writer: W,
) -> Result<(), InfrastructureError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        let rendered: Vec<String> = row
            .iter()
            .map(|cell| cell.to_text().map(|t| t.into_owned()).unwrap_or_default())
            .collect();
        csv_writer.write_record(&rendered)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::catalog::Severity;
    use anyhow::Result;

    fn violation(key: &str, rule_id: &str) -> Violation {
        Violation {
            issue_key: key.to_string(),
            summary: "Login Page".to_string(),
            rule_name: "Missing Acceptance Criteria".to_string(),
            category: "Product Backlog".to_string(),
            severity: Severity::High,
            reason: "Stories without clear finish lines lead to scope creep.".to_string(),
            remedy: "Define criteria during refinement.".to_string(),
            rule_id: rule_id.to_string(),
        }
    }

    #[test]
    fn test_export_has_fixed_header_and_row_order() -> Result<()> {
        let violations = vec![violation("EQS-101", "BP-02"), violation("EQS-104", "BP-02")];

        let mut buffer = Vec::new();
        write_violations_csv(&violations, &mut buffer)?;
        let text = String::from_utf8(buffer)?;

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Issue Key,Summary,Anti-Pattern Detected,Category,Severity,Reason,Remedy Recommendation,Rule Id"
        );
        assert!(lines.next().unwrap().starts_with("EQS-101,"));
        assert!(lines.next().unwrap().starts_with("EQS-104,"));
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn test_empty_report_still_has_a_header() -> Result<()> {
        let mut buffer = Vec::new();
        write_violations_csv(&[], &mut buffer)?;
        let text = String::from_utf8(buffer)?;

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Issue Key,"));
        Ok(())
    }

    #[test]
    fn test_severity_renders_as_its_wire_name() -> Result<()> {
        let mut buffer = Vec::new();
        write_violations_csv(&[violation("EQS-101", "BP-02")], &mut buffer)?;
        let text = String::from_utf8(buffer)?;

        assert!(text.contains(",High,"));
        Ok(())
    }

    #[test]
    fn test_dataset_round_trip() -> Result<()> {
        use crate::infrastructure::csv_source::dataset_from_reader;

        let csv = "Issue Key,Story Points\nEQS-101,5\nEQS-102,\n";
        let dataset = dataset_from_reader(csv.as_bytes())?;

        let mut buffer = Vec::new();
        write_dataset_csv(&dataset, &mut buffer)?;
        assert_eq!(String::from_utf8(buffer)?, csv);
        Ok(())
    }
}
