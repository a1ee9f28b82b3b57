// scrumlint-core/src/domain/engine/violation.rs

use crate::domain::catalog::{Rule, Severity};
use serde::{Deserialize, Serialize};

/// One (rule, row) match, carrying remediation guidance.
///
/// Append-only output: the engine builds a violation once and never
/// touches it again. Serde names double as the CSV export header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "Issue Key")]
    pub issue_key: String,

    #[serde(rename = "Summary")]
    pub summary: String,

    #[serde(rename = "Anti-Pattern Detected")]
    pub rule_name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Severity")]
    pub severity: Severity,

    #[serde(rename = "Reason")]
    pub reason: String,

    #[serde(rename = "Remedy Recommendation")]
    pub remedy: String,

    #[serde(rename = "Rule Id")]
    pub rule_id: String,
}

impl Violation {
    pub(crate) fn emit(rule: &Rule, issue_key: String, summary: String) -> Self {
        Self {
            issue_key,
            summary,
            rule_name: rule.name.clone(),
            category: rule.category.clone(),
            severity: rule.severity,
            reason: rule.description.clone(),
            remedy: rule.remedy.clone(),
            rule_id: rule.id.clone(),
        }
    }
}
