// scrumlint-core/src/domain/engine/evaluator.rs
//
// The rule evaluation engine. Given a dataset and a rule catalog, decides
// per rule whether it is applicable, applies the operator's matching
// semantics, and emits violations in (rule position, row position) order.
// Evaluation is pure: the caller's dataset is never mutated, and the
// ambient clock is an explicit parameter.

use crate::domain::catalog::{OperatorKind, Rule, RuleCatalog, Threshold};
use crate::domain::dataset::Dataset;
use crate::domain::engine::coerce;
use crate::domain::engine::violation::Violation;
use chrono::{Duration, NaiveDateTime};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Columns parsed as dates once, dataset-wide, before any rule runs.
pub const DATE_COLUMNS: [&str; 3] = ["Updated", "Created", "Resolved"];

/// Label used when a row's key or summary column is absent.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Well-known column names and windows, kept in one record so tests
/// (and non-Jira exports) can override them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EngineSettings {
    #[serde(default = "default_key_column")]
    pub key_column: String,

    #[serde(default = "default_summary_column")]
    pub summary_column: String,

    #[serde(default = "default_status_column")]
    pub status_column: String,

    #[serde(default = "default_in_progress_status")]
    pub in_progress_status: String,

    /// Stand-in for a real sprint calendar: "sprint start" is taken to be
    /// this many days before the evaluation clock.
    #[serde(default = "default_sprint_lookback_days")]
    pub sprint_lookback_days: i64,
}

fn default_key_column() -> String {
    "Issue Key".to_string()
}

fn default_summary_column() -> String {
    "Summary".to_string()
}

fn default_status_column() -> String {
    "Status".to_string()
}

fn default_in_progress_status() -> String {
    "In Progress".to_string()
}

fn default_sprint_lookback_days() -> i64 {
    5
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            key_column: default_key_column(),
            summary_column: default_summary_column(),
            status_column: default_status_column(),
            in_progress_status: default_in_progress_status(),
            sprint_lookback_days: default_sprint_lookback_days(),
        }
    }
}

/// A rule ready for evaluation. The operator string is resolved and the
/// keyword alternation is compiled exactly once, at engine construction.
struct CompiledRule {
    rule: Rule,
    op: Option<OperatorKind>,
    keyword_pattern: Option<Regex>,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Self {
        let op = rule.operator_kind();
        let keyword_pattern = match op {
            Some(OperatorKind::TextContainsRegex) => {
                compile_keywords(rule.detection_logic.threshold.as_ref())
            }
            _ => None,
        };
        Self {
            rule: rule.clone(),
            op,
            keyword_pattern,
        }
    }
}

/// Builds one case-insensitive alternation of literal substrings.
fn compile_keywords(threshold: Option<&Threshold>) -> Option<Regex> {
    let keywords = threshold?.as_keywords()?;
    let escaped: Vec<String> = keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .map(|k| regex::escape(k))
        .collect();
    if escaped.is_empty() {
        return None;
    }
    RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Call-local working copies of date-coerced columns. The well-known
/// columns are parsed up front; any other column a date operator targets
/// is parsed on first use. The caller's dataset is never touched.
struct DateCache {
    columns: HashMap<usize, Vec<Option<NaiveDateTime>>>,
}

impl DateCache {
    fn prewarmed(dataset: &Dataset) -> Self {
        let mut columns = HashMap::new();
        for name in DATE_COLUMNS {
            if let Some(idx) = dataset.column_index(name) {
                columns.insert(idx, parse_date_column(dataset, idx));
            }
        }
        Self { columns }
    }

    fn column(&mut self, dataset: &Dataset, idx: usize) -> &[Option<NaiveDateTime>] {
        self.columns
            .entry(idx)
            .or_insert_with(|| parse_date_column(dataset, idx))
            .as_slice()
    }
}

fn parse_date_column(dataset: &Dataset, idx: usize) -> Vec<Option<NaiveDateTime>> {
    (0..dataset.len())
        .map(|row| coerce::cell_date(dataset.cell(row, idx)))
        .collect()
}

fn parse_number_column(dataset: &Dataset, idx: usize) -> Vec<Option<f64>> {
    (0..dataset.len())
        .map(|row| coerce::cell_number(dataset.cell(row, idx)))
        .collect()
}

pub struct RuleEngine {
    rules: Vec<CompiledRule>,
    settings: EngineSettings,
}

impl RuleEngine {
    pub fn new(catalog: &RuleCatalog) -> Self {
        Self::with_settings(catalog, EngineSettings::default())
    }

    pub fn with_settings(catalog: &RuleCatalog, settings: EngineSettings) -> Self {
        let rules = catalog.rules().iter().map(CompiledRule::compile).collect();
        Self { rules, settings }
    }

    /// Applies every rule to the dataset and returns the violations,
    /// totally ordered by (rule position in catalog, row position in
    /// dataset). `now` is the reference clock for the day-offset
    /// operators; inject a fixed value for reproducible output.
    pub fn evaluate(&self, dataset: &Dataset, now: NaiveDateTime) -> Vec<Violation> {
        let mut dates = DateCache::prewarmed(dataset);
        let mut violations = Vec::new();

        for compiled in &self.rules {
            for row in self.matching_rows(compiled, dataset, now, &mut dates) {
                violations.push(Violation::emit(
                    &compiled.rule,
                    self.row_label(dataset, row, &self.settings.key_column),
                    self.row_label(dataset, row, &self.settings.summary_column),
                ));
            }
        }

        violations
    }

    /// Row selection for one rule. Every skip path returns an empty match
    /// set: a broken rule must not affect any other rule or the batch.
    fn matching_rows(
        &self,
        compiled: &CompiledRule,
        dataset: &Dataset,
        now: NaiveDateTime,
        dates: &mut DateCache,
    ) -> Vec<usize> {
        let rule_id = compiled.rule.id.as_str();
        let logic = &compiled.rule.detection_logic;

        let Some(op) = compiled.op else {
            debug!(
                rule = rule_id,
                operator = logic.operator.as_str(),
                "unknown operator, rule skipped"
            );
            return Vec::new();
        };

        let Some(field) = dataset.column_index(&logic.field) else {
            debug!(rule = rule_id, column = logic.field.as_str(), "column absent, rule skipped");
            return Vec::new();
        };

        let threshold = logic.threshold.as_ref();

        match op {
            OperatorKind::OlderThanDays => {
                let Some(cutoff) =
                    threshold.and_then(Threshold::as_days).and_then(|d| days_before(now, d))
                else {
                    return self.skip_threshold(rule_id, op);
                };
                match_before(dates.column(dataset, field), cutoff)
            }

            OperatorKind::IsEmpty => match_is_empty(dataset, field),

            OperatorKind::GreaterThan => {
                let Some(limit) = threshold.and_then(Threshold::as_number) else {
                    return self.skip_threshold(rule_id, op);
                };
                match_greater_than(&parse_number_column(dataset, field), limit)
            }

            OperatorKind::CreatedAfterSprintStart => {
                let Some(sprint_start) = days_before(now, self.settings.sprint_lookback_days)
                else {
                    return self.skip_threshold(rule_id, op);
                };
                match_after(dates.column(dataset, field), sprint_start)
            }

            OperatorKind::WordCountGreaterThan => {
                let Some(max_words) = threshold.and_then(Threshold::as_count) else {
                    return self.skip_threshold(rule_id, op);
                };
                match_word_count_over(dataset, field, max_words)
            }

            OperatorKind::WordCountLessThan => {
                let Some(min_words) = threshold.and_then(Threshold::as_count) else {
                    return self.skip_threshold(rule_id, op);
                };
                match_word_count_under(dataset, field, min_words)
            }

            OperatorKind::DaysSinceLastUpdate => {
                // Two-column operator: it must not flag on a dataset that
                // only carries half of what it conditions on.
                let Some(status) = dataset.column_index(&self.settings.status_column) else {
                    debug!(
                        rule = rule_id,
                        column = self.settings.status_column.as_str(),
                        "status column absent, rule skipped"
                    );
                    return Vec::new();
                };
                let Some(cutoff) =
                    threshold.and_then(Threshold::as_days).and_then(|d| days_before(now, d))
                else {
                    return self.skip_threshold(rule_id, op);
                };
                match_stale_in_progress(
                    dataset,
                    dates.column(dataset, field),
                    status,
                    &self.settings.in_progress_status,
                    cutoff,
                )
            }

            OperatorKind::ContainsText => {
                let Some(needle) = threshold.and_then(Threshold::as_text) else {
                    return self.skip_threshold(rule_id, op);
                };
                match_contains_text(dataset, field, &needle.to_lowercase())
            }

            OperatorKind::FieldsAreIdentical => {
                let Some(other_name) = threshold.and_then(Threshold::as_text) else {
                    return self.skip_threshold(rule_id, op);
                };
                let Some(other) = dataset.column_index(other_name) else {
                    // Absent companion column: every companion cell is
                    // null, so nothing can match.
                    return Vec::new();
                };
                match_identical(dataset, field, other)
            }

            OperatorKind::TextContainsRegex => {
                let Some(pattern) = compiled.keyword_pattern.as_ref() else {
                    return self.skip_threshold(rule_id, op);
                };
                match_keywords(dataset, field, pattern)
            }
        }
    }

    fn skip_threshold(&self, rule_id: &str, op: OperatorKind) -> Vec<usize> {
        debug!(rule = rule_id, operator = %op, "unusable threshold, rule skipped");
        Vec::new()
    }

    fn row_label(&self, dataset: &Dataset, row: usize, column: &str) -> String {
        dataset
            .cell_by_name(row, column)
            .to_text()
            .map(|c| c.into_owned())
            .unwrap_or_else(|| UNKNOWN_SENTINEL.to_string())
    }
}

/// One-shot evaluation with default settings.
pub fn evaluate(dataset: &Dataset, catalog: &RuleCatalog, now: NaiveDateTime) -> Vec<Violation> {
    RuleEngine::new(catalog).evaluate(dataset, now)
}

/// Checked day-offset arithmetic: a day count the calendar cannot
/// represent is just another unusable threshold, never a panic.
fn days_before(now: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    now.checked_sub_signed(Duration::try_days(days)?)
}

// --- MATCHING FUNCTIONS (one per operator, pure) ---
// A coercion miss (None) excludes the cell: missing never satisfies a
// comparison.

fn match_before(parsed: &[Option<NaiveDateTime>], cutoff: NaiveDateTime) -> Vec<usize> {
    parsed
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_some_and(|d| d < cutoff))
        .map(|(row, _)| row)
        .collect()
}

fn match_after(parsed: &[Option<NaiveDateTime>], start: NaiveDateTime) -> Vec<usize> {
    parsed
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_some_and(|d| d > start))
        .map(|(row, _)| row)
        .collect()
}

fn match_is_empty(dataset: &Dataset, field: usize) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| dataset.cell(row, field).is_blank())
        .collect()
}

fn match_greater_than(numbers: &[Option<f64>], limit: f64) -> Vec<usize> {
    numbers
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_some_and(|v| v > limit))
        .map(|(row, _)| row)
        .collect()
}

fn match_word_count_over(dataset: &Dataset, field: usize, max_words: usize) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| {
            dataset
                .cell(row, field)
                .to_text()
                .is_some_and(|t| coerce::word_count(&t) > max_words)
        })
        .collect()
}

/// Empty and missing cells are excluded here, not flagged: reporting them
/// again would double up with `is_empty`.
fn match_word_count_under(dataset: &Dataset, field: usize, min_words: usize) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| {
            dataset
                .cell(row, field)
                .to_text()
                .is_some_and(|t| !t.trim().is_empty() && coerce::word_count(&t) < min_words)
        })
        .collect()
}

fn match_stale_in_progress(
    dataset: &Dataset,
    parsed: &[Option<NaiveDateTime>],
    status: usize,
    in_progress: &str,
    cutoff: NaiveDateTime,
) -> Vec<usize> {
    parsed
        .iter()
        .enumerate()
        .filter(|(row, d)| {
            d.is_some_and(|d| d < cutoff)
                && dataset
                    .cell(*row, status)
                    .to_text()
                    .is_some_and(|s| s == in_progress)
        })
        .map(|(row, _)| row)
        .collect()
}

fn match_contains_text(dataset: &Dataset, field: usize, needle_lower: &str) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| {
            dataset
                .cell(row, field)
                .to_text()
                .is_some_and(|t| t.to_lowercase().contains(needle_lower))
        })
        .collect()
}

fn match_identical(dataset: &Dataset, field: usize, other: usize) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| {
            let a = dataset.cell(row, field).to_text();
            let b = dataset.cell(row, other).to_text();
            match (a, b) {
                (Some(a), Some(b)) => a.trim() == b.trim(),
                _ => false,
            }
        })
        .collect()
}

fn match_keywords(dataset: &Dataset, field: usize, pattern: &Regex) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&row| {
            dataset
                .cell(row, field)
                .to_text()
                .is_some_and(|t| pattern.is_match(&t))
        })
        .collect()
}
