// scrumlint-core/src/application/sample.rs
//
// The demo backlog: five simulated items seeded relative to the given
// clock so that most of the built-in rules have something to flag.

use crate::domain::dataset::{CellValue, Dataset};
use crate::domain::error::DomainError;
use chrono::{Duration, NaiveDateTime};

fn day(now: NaiveDateTime, days_ago: i64) -> CellValue {
    CellValue::Text((now - Duration::days(days_ago)).format("%Y-%m-%d").to_string())
}

pub fn sample_dataset(now: NaiveDateTime) -> Result<Dataset, DomainError> {
    let mut dataset = Dataset::new([
        "Issue Key",
        "Summary",
        "Status",
        "Updated",
        "Created",
        "Story Points",
        "Acceptance Criteria",
        "Description",
        "Sprint",
    ])?;

    // EQS-101: untouched for 100 days (zombie ticket)
    dataset.push_row(vec![
        "EQS-101".into(),
        "Setup Cloud Env".into(),
        "To Do".into(),
        day(now, 100),
        day(now, 120),
        CellValue::Number(5.0),
        "Defined".into(),
        "Provision the shared cloud environment for the team".into(),
        "Sprint 9".into(),
    ])?;

    // EQS-102: In Progress but stale, empty criteria, copy-paste description
    dataset.push_row(vec![
        "EQS-102".into(),
        "Login Page".into(),
        "In Progress".into(),
        day(now, 10),
        day(now, 10),
        CellValue::Number(8.0),
        "".into(),
        "Login Page".into(),
        "Sprint 10".into(),
    ])?;

    // EQS-103: healthy, already done
    dataset.push_row(vec![
        "EQS-103".into(),
        "Fix Typos".into(),
        "Done".into(),
        day(now, 0),
        day(now, 10),
        CellValue::Number(1.0),
        "Fixed".into(),
        "Correct the typos on the landing page copy".into(),
        "Sprint 10".into(),
    ])?;

    // EQS-104: 20 points (oversized)
    dataset.push_row(vec![
        "EQS-104".into(),
        "Huge Migration".into(),
        "To Do".into(),
        day(now, 0),
        day(now, 10),
        CellValue::Number(20.0),
        "Defined".into(),
        "Move every service to the new accounts database".into(),
        "Sprint 10".into(),
    ])?;

    // EQS-105: created today (sprint stuffing), TBD criteria, hardening sprint
    dataset.push_row(vec![
        "EQS-105".into(),
        "Urgent Fix".into(),
        "In Progress".into(),
        day(now, 0),
        day(now, 0),
        CellValue::Number(3.0),
        "TBD".into(),
        "Hotfix for the checkout outage reported by support".into(),
        "Sprint 10 Hardening".into(),
    ])?;

    Ok(dataset)
}
