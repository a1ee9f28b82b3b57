// scrumlint-core/src/application/analysis.rs

use crate::domain::catalog::{RuleCatalog, Severity};
use crate::domain::dataset::Dataset;
use crate::domain::engine::{EngineSettings, RuleEngine, Violation};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Everything the presentation layer needs to render one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_rows: usize,
    pub violations: Vec<Violation>,
    pub summary: AnalysisSummary,
}

/// Read-only reductions over the violation list. No engine logic here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub total_violations: usize,
    pub high_severity: usize,
    pub rules_violated: usize,
    /// `max(0, 100 - 15 * rules_violated)`: each distinct anti-pattern
    /// present in the backlog costs 15 points.
    pub health_score: u8,
}

impl AnalysisSummary {
    fn from_violations(violations: &[Violation]) -> Self {
        let distinct_rules: HashSet<&str> =
            violations.iter().map(|v| v.rule_id.as_str()).collect();
        let rules_violated = distinct_rules.len();
        let penalty = rules_violated.saturating_mul(15).min(100);

        Self {
            total_violations: violations.len(),
            high_severity: violations
                .iter()
                .filter(|v| v.severity == Severity::High)
                .count(),
            rules_violated,
            health_score: (100 - penalty) as u8,
        }
    }
}

/// USE CASE: run the full analysis with default engine settings.
pub fn analyze(dataset: &Dataset, catalog: &RuleCatalog, now: NaiveDateTime) -> AnalysisReport {
    analyze_with_settings(dataset, catalog, now, EngineSettings::default())
}

pub fn analyze_with_settings(
    dataset: &Dataset,
    catalog: &RuleCatalog,
    now: NaiveDateTime,
    settings: EngineSettings,
) -> AnalysisReport {
    let engine = RuleEngine::with_settings(catalog, settings);
    let violations = engine.evaluate(dataset, now);

    info!(
        rows = dataset.len(),
        rules = catalog.len(),
        violations = violations.len(),
        "Analysis complete"
    );

    let summary = AnalysisSummary::from_violations(&violations);
    AnalysisReport {
        total_rows: dataset.len(),
        violations,
        summary,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_catalog;
    use crate::domain::dataset::CellValue;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_clean_backlog_scores_100() {
        let mut ds = Dataset::new(["Issue Key", "Acceptance Criteria"]).unwrap();
        ds.push_row(vec!["EQS-101".into(), "Defined".into()]).unwrap();

        let report = analyze(&ds, &default_catalog(), fixed_now());
        assert!(report.violations.is_empty());
        assert_eq!(report.summary.health_score, 100);
        assert_eq!(report.total_rows, 1);
    }

    #[test]
    fn test_score_counts_distinct_rules_not_rows() {
        let mut ds = Dataset::new(["Issue Key", "Acceptance Criteria", "Story Points"]).unwrap();
        // Three rows violating BP-02, two also violating SP-01: two
        // distinct anti-patterns => 100 - 30.
        ds.push_row(vec!["EQS-101".into(), "".into(), CellValue::Number(20.0)])
            .unwrap();
        ds.push_row(vec!["EQS-102".into(), "  ".into(), CellValue::Number(40.0)])
            .unwrap();
        ds.push_row(vec!["EQS-103".into(), "".into(), CellValue::Number(1.0)])
            .unwrap();

        let report = analyze(&ds, &default_catalog(), fixed_now());
        assert_eq!(report.summary.rules_violated, 2);
        assert_eq!(report.summary.health_score, 70);
        assert_eq!(report.summary.total_violations, 5);
        // BP-02 is a High severity rule, SP-01 is not
        assert_eq!(report.summary.high_severity, 3);
    }

    #[test]
    fn test_score_never_goes_below_zero() {
        let violations: Vec<Violation> = (0..8)
            .map(|i| Violation {
                issue_key: "EQS-101".to_string(),
                summary: "Login Page".to_string(),
                rule_name: format!("Rule {}", i),
                category: "Test".to_string(),
                severity: Severity::Low,
                reason: String::new(),
                remedy: String::new(),
                rule_id: format!("R-{:02}", i),
            })
            .collect();

        let summary = AnalysisSummary::from_violations(&violations);
        assert_eq!(summary.rules_violated, 8);
        assert_eq!(summary.health_score, 0);
    }
}
