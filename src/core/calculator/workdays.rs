use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn is_working_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First Monday–Friday date strictly after `d`.
pub fn next_working_day(d: NaiveDate) -> NaiveDate {
    let mut next = d;
    loop {
        next = next.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
        if is_working_day(next) || next == NaiveDate::MAX {
            return next;
        }
    }
}
