use chrono::NaiveDate;
use rdailylog::core::calculator::hours::total_hours;
use rdailylog::core::calculator::workdays::next_working_day;
use rdailylog::core::post::{build_status_post, join_descriptions};
use rdailylog::core::view::{DayView, sorted_indices, storage_index};
use rdailylog::errors::AppError;
use rdailylog::models::{DayRecord, LogEntry};
use rdailylog::utils::date::format_display_date;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn entries(spans: &[(&str, &str)]) -> Vec<LogEntry> {
    spans
        .iter()
        .map(|(s, e)| LogEntry::new(s, e, "work"))
        .collect()
}

#[test]
fn test_total_hours_sums_entries() {
    let logs = entries(&[("09:00", "12:00"), ("13:00", "17:00")]);
    assert_eq!(total_hours(&logs).expect("total"), 7.0);
    assert_eq!(total_hours(&[]).expect("total"), 0.0);

    let half_hours = entries(&[("09:00", "12:30"), ("13:30", "17:00")]);
    assert_eq!(total_hours(&half_hours).expect("total"), 7.0);
}

#[test]
fn test_total_hours_rounds_to_one_decimal() {
    // 20 minutes → 0.333… → 0.3
    assert_eq!(total_hours(&entries(&[("09:00", "09:20")])).expect("total"), 0.3);
    // 45 minutes → 0.75 → 0.8
    assert_eq!(total_hours(&entries(&[("09:00", "09:45")])).expect("total"), 0.8);
}

#[test]
fn test_total_hours_halves_go_to_even_tenth() {
    // 1.25 → 1.2, 0.25 → 0.2, 0.75 → 0.8
    assert_eq!(total_hours(&entries(&[("09:00", "10:15")])).expect("total"), 1.2);
    assert_eq!(total_hours(&entries(&[("09:00", "09:15")])).expect("total"), 0.2);
    assert_eq!(total_hours(&entries(&[("09:00", "09:45")])).expect("total"), 0.8);
    // two quarter hours sum before rounding
    assert_eq!(
        total_hours(&entries(&[("09:00", "09:15"), ("10:00", "11:00")])).expect("total"),
        1.2
    );
}

#[test]
fn test_total_hours_wraps_overnight() {
    assert_eq!(total_hours(&entries(&[("23:00", "01:00")])).expect("total"), 2.0);
}

#[test]
fn test_total_hours_rejects_bad_time() {
    let logs = entries(&[("09:00", "10:00"), ("9h", "10:00")]);
    assert!(matches!(total_hours(&logs), Err(AppError::InvalidTime(_))));
}

#[test]
fn test_next_working_day_skips_weekend() {
    // Mon..Thu → next day
    assert_eq!(next_working_day(date("2026-10-12")), date("2026-10-13"));
    assert_eq!(next_working_day(date("2026-10-15")), date("2026-10-16"));
    // Fri, Sat, Sun → Monday
    assert_eq!(next_working_day(date("2026-10-16")), date("2026-10-19"));
    assert_eq!(next_working_day(date("2026-10-17")), date("2026-10-19"));
    assert_eq!(next_working_day(date("2026-10-18")), date("2026-10-19"));
}

#[test]
fn test_format_display_date() {
    assert_eq!(format_display_date("2026-10-16"), "2026/10/16");
    assert_eq!(format_display_date("someday"), "someday");
}

#[test]
fn test_status_post_layout() {
    let rec = DayRecord {
        jira: vec!["JIRA-1".into(), "JIRA-2".into()],
        next_jira: vec!["JIRA-3".into()],
        next_date: "2026-10-20".into(),
        ..DayRecord::default()
    };

    assert_eq!(
        build_status_post(date("2026-10-16"), &rec, "預計"),
        "2026/10/16\n1. JIRA-1\n2. JIRA-2\n\n2026/10/20 預計\n1. JIRA-3"
    );
}

#[test]
fn test_status_post_defaults_next_date_and_marker() {
    let rec = DayRecord::default();

    assert_eq!(
        build_status_post(date("2026-10-16"), &rec, ""),
        "2026/10/16\n\n2026/10/19"
    );
}

#[test]
fn test_join_descriptions_skips_empty() {
    let logs = vec![
        LogEntry::new("09:00", "10:00", "a"),
        LogEntry::new("10:00", "11:00", ""),
        LogEntry::new("11:00", "12:00", "b"),
    ];
    assert_eq!(join_descriptions(&logs), "a\nb");
}

#[test]
fn test_sort_is_stable_by_start() {
    let logs = entries(&[("14:00", "15:00"), ("08:00", "09:00"), ("14:00", "14:30")]);

    assert_eq!(sorted_indices(&logs), vec![1, 0, 2]);
    assert_eq!(storage_index(&logs, 1), Some(1));
    assert_eq!(storage_index(&logs, 3), Some(2));
    assert_eq!(storage_index(&logs, 0), None);
    assert_eq!(storage_index(&logs, 4), None);
}

#[test]
fn test_day_view_post_only_with_references() {
    let mut rec = DayRecord {
        logs: entries(&[("09:00", "10:30")]),
        ..DayRecord::default()
    };
    let view = DayView::build(date("2026-10-16"), Some(&rec), "2026-10-19".into(), "預計");
    assert_eq!(view.total_hours, Some(1.5));
    assert!(view.post.is_none());

    rec.next_jira.push("JIRA-7".into());
    let view = DayView::build(date("2026-10-16"), Some(&rec), "2026-10-19".into(), "預計");
    assert!(view.post.expect("post generated").contains("1. JIRA-7"));
}
