use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::utils::time::{minutes_between, minutes_to_hours, require_time};

/// Worked minutes of a single entry.
pub fn entry_minutes(entry: &LogEntry) -> AppResult<i64> {
    let start = require_time(&entry.start)?;
    let end = require_time(&entry.end)?;
    Ok(minutes_between(start, end))
}

/// Total worked hours, rounded to one decimal place.
///
/// Each entry is parsed on its own; the first unparsable `HH:MM` aborts the
/// computation with `InvalidTime`.
pub fn total_hours(logs: &[LogEntry]) -> AppResult<f64> {
    let mut total = 0;
    for entry in logs {
        total += entry_minutes(entry)?;
    }
    Ok(minutes_to_hours(total))
}
