use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FMT: &str = "%Y/%m/%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Parse a `YYYY-MM-DD` string, failing with `InvalidDate`.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Storage representation of a date (document key, `next_date` field).
pub fn to_key(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// `YYYY-MM-DD` -> `YYYY/MM/DD`.
///
/// Strings that are not valid dates are returned unchanged, since a stored
/// `next_date` is never validated.
pub fn format_display_date(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format(DISPLAY_DATE_FMT).to_string(),
        None => s.to_string(),
    }
}
