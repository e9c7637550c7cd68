// src/export/model.rs

use crate::core::calculator::hours::entry_minutes;
use crate::models::{Document, LogEntry};
use crate::utils::time::minutes_to_hours;
use serde::Serialize;

/// Flat row for CSV / JSON export: one log entry of one day.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LogExport {
    pub date: String,
    pub start: String,
    pub end: String,
    /// Empty when start/end are not valid `HH:MM`
    pub hours: Option<f64>,
    pub desc: String,
}

impl LogExport {
    pub fn from_entry(date: &str, entry: &LogEntry) -> Self {
        Self {
            date: date.to_string(),
            start: entry.start.clone(),
            end: entry.end.clone(),
            hours: entry_minutes(entry).ok().map(minutes_to_hours),
            desc: entry.desc.clone(),
        }
    }
}

/// Every log of every stored day, by date then insertion order.
pub(crate) fn rows_from_document(doc: &Document) -> Vec<LogExport> {
    doc.iter()
        .flat_map(|(date, rec)| rec.logs.iter().map(move |e| LogExport::from_entry(date, e)))
        .collect()
}
