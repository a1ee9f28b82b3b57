// scrumlint-core/src/domain/catalog/builtin.rs
//
// The compiled-in fallback catalog. Used when no rule file is supplied or
// when the supplied file cannot be parsed at all.

use crate::domain::catalog::rule::{DetectionLogic, Rule, Severity, Threshold};
use crate::domain::catalog::{MetaInfo, RuleCatalog};

fn rule(
    id: &str,
    name: &str,
    category: &str,
    severity: Severity,
    description: &str,
    field: &str,
    operator: &str,
    threshold: Threshold,
    remedy: &str,
) -> Rule {
    Rule {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        severity,
        description: description.to_string(),
        remedy: remedy.to_string(),
        detection_logic: DetectionLogic {
            field: field.to_string(),
            operator: operator.to_string(),
            threshold: Some(threshold),
        },
    }
}

fn keywords(words: &[&str]) -> Threshold {
    Threshold::Keywords(words.iter().map(|w| w.to_string()).collect())
}

/// The built-in knowledge base.
pub fn default_catalog() -> RuleCatalog {
    RuleCatalog {
        meta_info: Some(MetaInfo {
            version: "1.0".to_string(),
            last_updated: "2025-11-20".to_string(),
        }),
        anti_patterns: vec![
            rule(
                "BP-01",
                "Outdated Items (Zombie Tickets)",
                "Product Backlog",
                Severity::Medium,
                "Items that haven't been touched for months create noise.",
                "Updated",
                "older_than_days",
                Threshold::Number(90.0),
                "Review in 'Anti-Product Backlog' and delete if no longer valuable.",
            ),
            rule(
                "BP-02",
                "Missing Acceptance Criteria",
                "Product Backlog",
                Severity::High,
                "Stories without clear finish lines lead to scope creep.",
                "Acceptance Criteria",
                "is_empty",
                Threshold::Number(0.0),
                "Define criteria during refinement. Use Gherkin syntax.",
            ),
            rule(
                "BP-03",
                "Placeholder Acceptance Criteria",
                "Product Backlog",
                Severity::Low,
                "Criteria left as TBD pass refinement without being refined.",
                "Acceptance Criteria",
                "contains_text",
                Threshold::Text("TBD".to_string()),
                "Replace the placeholder with testable criteria before planning.",
            ),
            rule(
                "BP-04",
                "One-Word Summary",
                "Product Backlog",
                Severity::Medium,
                "A one-word summary doesn't tell the team what the item is.",
                "Summary",
                "word_count_less_than",
                Threshold::Number(2.0),
                "Rewrite the summary as 'who needs what, and why'.",
            ),
            rule(
                "BP-05",
                "Copy-Paste Description",
                "Product Backlog",
                Severity::Medium,
                "The description just repeats the summary and adds no detail.",
                "Description",
                "fields_are_identical",
                Threshold::Text("Summary".to_string()),
                "Describe context, constraints and the expected outcome.",
            ),
            rule(
                "BP-06",
                "Novel-Length Description",
                "Product Backlog",
                Severity::Low,
                "A description this long usually hides an epic, not a story.",
                "Description",
                "word_count_greater_than",
                Threshold::Number(200.0),
                "Split the item and move the background to a linked page.",
            ),
            rule(
                "SP-01",
                "Oversized Item (INVEST)",
                "Sprint Planning",
                Severity::Medium,
                "Item is too big to finish in one sprint.",
                "Story Points",
                "greater_than",
                Threshold::Number(13.0),
                "Split the story using 'Hamburger' or 'Spider' method.",
            ),
            rule(
                "SE-01",
                "Sprint Stuffing",
                "Sprint Execution",
                Severity::High,
                "Adding too much scope after Sprint start.",
                "Created",
                "created_after_sprint_start",
                Threshold::Number(0.0),
                "Monitor scope change. Only swap items of equal size.",
            ),
            rule(
                "SE-02",
                "Stale In-Progress Item",
                "Sprint Execution",
                Severity::High,
                "Work marked In Progress that nobody touches hides a blocker.",
                "Updated",
                "days_since_last_update",
                Threshold::Number(5.0),
                "Raise it in the Daily Scrum, then split or unblock the work.",
            ),
            rule(
                "SE-03",
                "Undercover Hardening Sprint",
                "Sprint Execution",
                Severity::Medium,
                "Dedicated hardening sprints mean quality was pushed out of the Definition of Done.",
                "Sprint",
                "text_contains_regex",
                keywords(&["Hardening", "Stabilization", "Cleanup", "Bugfix"]),
                "Build quality work into every sprint instead of batching it.",
            ),
        ],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_builtin_operator_is_recognized() {
        let catalog = default_catalog();
        for rule in catalog.rules() {
            assert!(
                rule.operator_kind().is_some(),
                "rule {} declares an unknown operator '{}'",
                rule.id,
                rule.detection_logic.operator
            );
        }
    }

    #[test]
    fn test_builtin_rule_ids_are_unique() {
        let catalog = default_catalog();
        let ids: HashSet<&str> = catalog.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_builtin_covers_the_full_operator_surface() {
        use crate::domain::catalog::OperatorKind;
        let catalog = default_catalog();
        let used: HashSet<OperatorKind> = catalog
            .rules()
            .iter()
            .filter_map(|r| r.operator_kind())
            .collect();
        for op in OperatorKind::ALL {
            assert!(used.contains(&op), "no builtin rule exercises {}", op);
        }
    }
}
