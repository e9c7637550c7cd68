//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a `HH:MM` string, failing with `InvalidTime`.
pub fn require_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t.trim()).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minutes from `start` to `end` on a 24h clock.
/// An `end` earlier than `start` is an overnight span and wraps to the next day.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes().rem_euclid(MINUTES_PER_DAY)
}

/// Minutes -> hours rounded to one decimal place.
///
/// Exact halves go to the even tenth: 75 min -> 1.2, 45 min -> 0.8.
pub fn minutes_to_hours(mins: i64) -> f64 {
    let scaled = mins * 10;
    let mut tenths = scaled.div_euclid(60);
    match scaled.rem_euclid(60) {
        r if r > 30 => tenths += 1,
        30 if tenths % 2 != 0 => tenths += 1,
        _ => {}
    }
    tenths as f64 / 10.0
}
