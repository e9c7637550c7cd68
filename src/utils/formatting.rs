//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in a column of `width` terminal cells.
/// Wide characters (CJK descriptions are common here) count as two cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // es: 02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours with exactly one decimal, as shown next to the log list (`7.0`).
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// One display line for a log entry: `09:00 → 10:00 standup`.
pub fn log_line(start: &str, end: &str, desc: &str) -> String {
    format!("{start} → {end} {desc}")
}
