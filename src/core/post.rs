//! Status post and clipboard payloads.

use crate::core::calculator::workdays::next_working_day;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, LogEntry};
use crate::store::Store;
use crate::utils::date::{format_display_date, to_key};
use chrono::NaiveDate;

/// Build the multi-line status post for `date`:
///
/// ```text
/// 2026/10/16
/// 1. JIRA-1
/// 2. JIRA-2
///
/// 2026/10/19 預計
/// 1. JIRA-3
/// ```
pub fn build_status_post(date: NaiveDate, record: &DayRecord, planned_marker: &str) -> String {
    let mut lines = Vec::new();
    lines.push(format_display_date(&to_key(date)));
    for (i, link) in record.jira.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, link));
    }

    lines.push(String::new());

    let next_date = if record.next_date.is_empty() {
        to_key(next_working_day(date))
    } else {
        record.next_date.clone()
    };
    let next_line = format_display_date(&next_date);
    if planned_marker.is_empty() {
        lines.push(next_line);
    } else {
        lines.push(format!("{next_line} {planned_marker}"));
    }
    for (i, link) in record.next_jira.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, link));
    }

    lines.join("\n")
}

/// Non-empty descriptions, one per line, in storage order.
pub fn join_descriptions(logs: &[LogEntry]) -> String {
    logs.iter()
        .filter(|l| !l.desc.is_empty())
        .map(|l| l.desc.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct PostLogic;

impl PostLogic {
    /// Post for today's record; fails when nothing was recorded today.
    pub fn generate(store: &Store, planned_marker: &str) -> AppResult<String> {
        let record = store
            .get_today_record()?
            .ok_or_else(|| AppError::NoRecordForToday(store.today_key()))?;
        Ok(build_status_post(store.today(), &record, planned_marker))
    }

    pub fn descriptions(store: &Store) -> AppResult<String> {
        Ok(join_descriptions(&store.get_logs()?))
    }
}
