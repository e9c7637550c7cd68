//! Read model rendered by both the CLI and the interactive window.

use crate::core::calculator::hours::{entry_minutes, total_hours};
use crate::core::post::build_status_post;
use crate::errors::AppResult;
use crate::models::{DayRecord, LogEntry};
use crate::store::Store;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// A log entry as shown in the sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    /// 1-based position in the sorted list
    pub position: usize,
    /// index in the stored `logs`
    pub index: usize,
    pub entry: LogEntry,
    /// `None` when start/end cannot be parsed
    pub minutes: Option<i64>,
}

/// Storage indices of `logs` ordered by start time.
/// The sort is stable: entries with the same start keep insertion order.
pub fn sorted_indices(logs: &[LogEntry]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..logs.len()).collect();
    idx.sort_by_key(|&i| (parse_time(logs[i].start.trim()), logs[i].start.clone()));
    idx
}

/// Map a 1-based display position to the storage index.
pub fn storage_index(logs: &[LogEntry], position: usize) -> Option<usize> {
    if position == 0 {
        return None;
    }
    sorted_indices(logs).get(position - 1).copied()
}

pub fn log_rows(logs: &[LogEntry]) -> Vec<LogRow> {
    sorted_indices(logs)
        .into_iter()
        .enumerate()
        .map(|(pos, index)| LogRow {
            position: pos + 1,
            index,
            entry: logs[index].clone(),
            minutes: entry_minutes(&logs[index]).ok(),
        })
        .collect()
}

/// Everything shown for today.
#[derive(Debug, Clone)]
pub struct DayView {
    pub today: NaiveDate,
    pub rows: Vec<LogRow>,
    /// `None` when some entry has an unparsable time
    pub total_hours: Option<f64>,
    pub jira: Vec<String>,
    pub next_jira: Vec<String>,
    pub next_date: String,
    /// Generated only when today has at least one reference
    pub post: Option<String>,
}

impl DayView {
    pub fn load(store: &Store, planned_marker: &str) -> AppResult<Self> {
        let today = store.today();
        let record = store.get_today_record()?;
        let next_date = store.get_next_date()?;

        Ok(Self::build(today, record.as_ref(), next_date, planned_marker))
    }

    pub fn build(
        today: NaiveDate,
        record: Option<&DayRecord>,
        next_date: String,
        planned_marker: &str,
    ) -> Self {
        let empty = DayRecord::default();
        let rec = record.unwrap_or(&empty);

        Self {
            today,
            rows: log_rows(&rec.logs),
            total_hours: total_hours(&rec.logs).ok(),
            jira: rec.jira.clone(),
            next_jira: rec.next_jira.clone(),
            next_date,
            post: rec
                .has_refs()
                .then(|| build_status_post(today, rec, planned_marker)),
        }
    }
}
