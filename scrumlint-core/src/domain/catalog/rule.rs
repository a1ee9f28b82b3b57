// scrumlint-core/src/domain/catalog/rule.rs

use crate::domain::catalog::operator::OperatorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One anti-pattern detection rule, immutable once loaded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub remedy: String,
    pub detection_logic: DetectionLogic,
}

impl Rule {
    /// Resolves the declared operator. `None` means the rule is inert:
    /// it is skipped at evaluation time, never applied.
    pub fn operator_kind(&self) -> Option<OperatorKind> {
        self.detection_logic.operator.parse().ok()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DetectionLogic {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub threshold: Option<Threshold>,
}

/// The operator-specific comparison value carried by a rule.
///
/// Deserialization is deliberately permissive: any JSON/YAML shape parses
/// (the catch-all variant swallows what the typed ones don't), and the
/// typed accessors below return `None` for shapes an operator cannot use.
/// Threshold problems therefore degrade to "rule never matches" instead
/// of failing the catalog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Threshold {
    Number(f64),
    Text(String),
    Keywords(Vec<String>),
    Other(serde_json::Value),
}

impl Threshold {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Threshold::Number(n) => Some(*n),
            Threshold::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Whole-day offsets. A fractional day count is a shape the day-offset
    /// operators cannot use, so it yields `None` like any other mismatch.
    pub fn as_days(&self) -> Option<i64> {
        let n = self.as_number()?;
        if n.is_finite() && n.fract() == 0.0 {
            Some(n as i64)
        } else {
            None
        }
    }

    /// Non-negative whole counts (word-count operators).
    pub fn as_count(&self) -> Option<usize> {
        let days = self.as_days()?;
        usize::try_from(days).ok()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Threshold::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Keyword list for `text_contains_regex`. A bare string is accepted
    /// as a single-keyword list.
    pub fn as_keywords(&self) -> Option<Vec<&str>> {
        match self {
            Threshold::Keywords(list) => Some(list.iter().map(String::as_str).collect()),
            Threshold::Text(s) => Some(vec![s.as_str()]),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[serde(alias = "low")]
    Low,
    #[default]
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::High);
        assert!(Severity::High > Severity::Medium);
    }

    #[test]
    fn test_rule_deserializes_from_catalog_json() -> Result<()> {
        let json = r#"{
            "id": "BP-01",
            "name": "Outdated Items (Zombie Tickets)",
            "category": "Product Backlog",
            "severity": "Medium",
            "description": "Items that haven't been touched for months create noise.",
            "detection_logic": {"field": "Updated", "operator": "older_than_days", "threshold": 90},
            "remedy": "Review in 'Anti-Product Backlog' and delete if no longer valuable."
        }"#;
        let rule: Rule = serde_json::from_str(json)?;
        assert_eq!(rule.severity, Severity::Medium);
        assert_eq!(rule.operator_kind(), Some(OperatorKind::OlderThanDays));
        assert_eq!(
            rule.detection_logic.threshold.as_ref().unwrap().as_days(),
            Some(90)
        );
        Ok(())
    }

    #[test]
    fn test_unknown_operator_makes_rule_inert_not_invalid() -> Result<()> {
        let json = r#"{
            "id": "X-01",
            "name": "Future Rule",
            "category": "Misc",
            "severity": "Low",
            "description": "Uses an operator this build does not know.",
            "detection_logic": {"field": "Summary", "operator": "sentiment_is_negative", "threshold": 0},
            "remedy": "n/a"
        }"#;
        let rule: Rule = serde_json::from_str(json)?;
        assert_eq!(rule.operator_kind(), None);
        Ok(())
    }

    #[test]
    fn test_threshold_shapes() -> Result<()> {
        let n: Threshold = serde_json::from_str("13")?;
        assert_eq!(n.as_number(), Some(13.0));
        assert_eq!(n.as_days(), Some(13));

        let fractional: Threshold = serde_json::from_str("90.5")?;
        assert_eq!(fractional.as_number(), Some(90.5));
        assert_eq!(fractional.as_days(), None);

        let text: Threshold = serde_json::from_str(r#""Summary""#)?;
        assert_eq!(text.as_text(), Some("Summary"));
        assert_eq!(text.as_keywords(), Some(vec!["Summary"]));

        let keywords: Threshold = serde_json::from_str(r#"["Hardening", "Cleanup"]"#)?;
        assert_eq!(keywords.as_keywords(), Some(vec!["Hardening", "Cleanup"]));
        assert_eq!(keywords.as_number(), None);

        // Anything else still parses, but satisfies no accessor
        let odd: Threshold = serde_json::from_str(r#"{"days": 90}"#)?;
        assert_eq!(odd.as_number(), None);
        assert_eq!(odd.as_text(), None);
        assert_eq!(odd.as_keywords(), None);
        Ok(())
    }

    #[test]
    fn test_missing_threshold_key_is_tolerated() -> Result<()> {
        let json = r#"{"field": "Acceptance Criteria", "operator": "is_empty"}"#;
        let logic: DetectionLogic = serde_json::from_str(json)?;
        assert_eq!(logic.threshold, None);
        Ok(())
    }

    #[test]
    fn test_lowercase_severity_alias() -> Result<()> {
        let sev: Severity = serde_json::from_str(r#""high""#)?;
        assert_eq!(sev, Severity::High);
        Ok(())
    }
}
