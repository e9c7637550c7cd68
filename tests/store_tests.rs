mod common;
use chrono::NaiveDate;
use common::store_in;
use rdailylog::core::add::AddLogic;
use rdailylog::core::del::DeleteLogic;
use rdailylog::core::edit::EditLogic;
use rdailylog::core::jira::JiraLogic;
use rdailylog::errors::AppError;
use rdailylog::models::{DayRecord, Document, LogEntry, RefList};
use rdailylog::store::Store;
use std::fs;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn record(jira: &[&str], next_jira: &[&str]) -> DayRecord {
    DayRecord {
        jira: jira.iter().map(|s| s.to_string()).collect(),
        next_jira: next_jira.iter().map(|s| s.to_string()).collect(),
        ..DayRecord::default()
    }
}

fn seed(store: &Store, entries: &[(&str, DayRecord)]) {
    let doc: Document = entries
        .iter()
        .map(|(k, r)| (k.to_string(), r.clone()))
        .collect();
    store.save(&doc).expect("seed document");
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    assert!(store.load().expect("load").is_empty());
    assert!(store.get_logs().expect("logs").is_empty());
    assert!(store.get_today_record().expect("record").is_none());
}

#[test]
fn test_ensure_initialized_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::new(dir.path().join("nested").join("data.json"));

    assert!(store.ensure_initialized().expect("first init"));
    assert!(!store.ensure_initialized().expect("second init"));
    assert!(store.path().exists());
}

#[test]
fn test_append_creates_record_with_next_working_day() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    store.append_log("09:00", "10:00", "standup").expect("append");

    let rec = store.get_today_record().expect("load").expect("record exists");
    assert_eq!(rec.logs, vec![LogEntry::new("09:00", "10:00", "standup")]);
    assert_eq!(rec.next_date, "2026-10-19");
    assert!(rec.jira.is_empty());
}

#[test]
fn test_first_entry_on_empty_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    AddLogic::apply(&store, "09:00", "10:00", "standup").expect("add");

    let logs = store.get_logs().expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(
        rdailylog::core::calculator::hours::total_hours(&logs).expect("total"),
        1.0
    );
}

#[test]
fn test_append_then_delete_restores_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    store.append_log("09:00", "10:00", "a").expect("append");
    let before = store.load().expect("load");

    store.append_log("10:00", "11:00", "b").expect("append");
    let removed = store.delete_log(1).expect("delete");

    assert_eq!(removed, Some(LogEntry::new("10:00", "11:00", "b")));
    assert_eq!(store.load().expect("load"), before);
}

#[test]
fn test_out_of_range_mutations_change_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    // no record for today yet
    assert!(!store.update_log(0, "09:00", "10:00").expect("update"));
    assert_eq!(store.delete_log(0).expect("delete"), None);
    assert!(!store.path().exists());

    store.append_log("09:00", "10:00", "a").expect("append");
    let before = fs::read_to_string(store.path()).expect("read");

    assert!(!store.update_log(3, "11:00", "12:00").expect("update"));
    assert!(!store.update_log_entry(3, "11:00", "12:00", "x").expect("update"));
    assert_eq!(store.delete_reference(0, RefList::Today).expect("delete"), None);
    assert_eq!(fs::read_to_string(store.path()).expect("read"), before);
}

#[test]
fn test_update_log_keeps_description() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    store.append_log("09:00", "10:00", "standup").expect("append");

    assert!(store.update_log(0, "09:15", "09:45").expect("update"));
    assert_eq!(
        store.get_logs().expect("logs"),
        vec![LogEntry::new("09:15", "09:45", "standup")]
    );
}

#[test]
fn test_references_are_per_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    store.add_reference("JIRA-1", RefList::Today).expect("add");
    store.add_reference("JIRA-1", RefList::Today).expect("add duplicate");
    store.add_reference("JIRA-9", RefList::Next).expect("add next");

    assert_eq!(
        store.get_references(RefList::Today).expect("refs"),
        vec!["JIRA-1", "JIRA-1"]
    );
    assert_eq!(
        store.delete_reference(0, RefList::Next).expect("delete"),
        Some("JIRA-9".to_string())
    );
    assert!(store.get_references(RefList::Next).expect("refs").is_empty());
}

#[test]
fn test_next_date_stored_as_given() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    assert_eq!(store.get_next_date().expect("default"), "2026-10-19");

    store.set_next_date("2099-01-01").expect("set");
    assert_eq!(store.get_next_date().expect("get"), "2099-01-01");

    // a Saturday, kept as is
    store.set_next_date("2026-10-17").expect("set weekend");
    assert_eq!(store.get_next_date().expect("get"), "2026-10-17");
}

#[test]
fn test_prune_keeps_boundary_and_non_dates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    seed(
        &store,
        &[
            ("2026-10-01", DayRecord::default()),
            ("2026-10-10", DayRecord::default()),
            ("2026-10-11", DayRecord::default()),
            ("2026-10-16", DayRecord::default()),
            ("notes", DayRecord::default()),
        ],
    );

    let outcome = store.prune(5).expect("prune");

    assert_eq!(outcome.removed, vec!["2026-10-01", "2026-10-10"]);
    assert_eq!(outcome.skipped, vec!["notes"]);
    let keys: Vec<String> = store.load().expect("load").into_keys().collect();
    assert_eq!(keys, vec!["2026-10-11", "2026-10-16", "notes"]);
}

#[test]
fn test_prune_zero_days_keeps_today() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    store.append_log("09:00", "10:00", "standup").expect("append");
    seed_extra(&store, "2026-10-17");

    let outcome = store.prune(0).expect("prune");

    assert!(outcome.removed.is_empty());
    assert_eq!(store.get_logs().expect("logs").len(), 1);
    assert!(store.load().expect("load").contains_key("2026-10-17"));
}

fn seed_extra(store: &Store, key: &str) {
    let mut doc = store.load().expect("load");
    doc.insert(key.to_string(), DayRecord::default());
    store.save(&doc).expect("save");
}

#[test]
fn test_unknown_record_fields_survive_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    fs::write(
        store.path(),
        r#"{"2026-10-16":{"jira":[],"logs":[],"next_date":"","next_jira":[],"mood":"ok"}}"#,
    )
    .expect("write");

    store.append_log("09:00", "10:00", "standup").expect("append");

    let raw = fs::read_to_string(store.path()).expect("read");
    assert!(raw.contains("\"mood\": \"ok\""));
    let rec = store.get_today_record().expect("load").expect("record");
    assert_eq!(rec.extra.get("mood"), Some(&serde_json::json!("ok")));
}

#[test]
fn test_prune_without_old_records_leaves_file_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    fs::write(store.path(), r#"{"2026-10-15":{"jira":[],"logs":[],"next_date":"","next_jira":[]}}"#)
        .expect("write");

    let outcome = store.prune(5).expect("prune");

    assert!(outcome.removed.is_empty());
    assert_eq!(
        fs::read_to_string(store.path()).expect("read"),
        r#"{"2026-10-15":{"jira":[],"logs":[],"next_date":"","next_jira":[]}}"#
    );
}

#[test]
fn test_most_recent_prior_date_ignores_today_and_future() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    assert_eq!(store.find_most_recent_prior_date().expect("find"), None);

    seed(
        &store,
        &[
            ("2026-10-12", DayRecord::default()),
            ("2026-10-14", DayRecord::default()),
            ("2026-10-16", DayRecord::default()),
            ("2026-10-20", DayRecord::default()),
        ],
    );

    assert_eq!(
        store.find_most_recent_prior_date().expect("find"),
        Some(date("2026-10-14"))
    );
}

#[test]
fn test_copy_forward_never_duplicates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    seed(
        &store,
        &[
            ("2026-10-15", record(&["A", "B", "A"], &["N1"])),
            ("2026-10-16", record(&["B"], &[])),
        ],
    );

    let first = store.copy_forward_references(date("2026-10-15")).expect("copy");
    assert_eq!((first.jira, first.next_jira), (1, 1));
    assert_eq!(store.get_references(RefList::Today).expect("refs"), vec!["B", "A"]);

    let second = store.copy_forward_references(date("2026-10-15")).expect("copy again");
    assert_eq!(second.total(), 0);
    assert_eq!(store.get_references(RefList::Today).expect("refs"), vec!["B", "A"]);
    assert_eq!(store.get_references(RefList::Next).expect("refs"), vec!["N1"]);
}

#[test]
fn test_copy_forward_creates_today() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    seed(&store, &[("2026-10-14", record(&["X"], &[]))]);

    let (prev, outcome) = store.carry_forward().expect("carry").expect("prior day exists");

    assert_eq!(prev, date("2026-10-14"));
    assert_eq!(outcome.jira, 1);
    let rec = store.get_today_record().expect("load").expect("created");
    assert_eq!(rec.next_date, "2026-10-19");
}

#[test]
fn test_logic_maps_display_position_to_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    AddLogic::apply(&store, "14:00", "15:00", "later").expect("add");
    AddLogic::apply(&store, "08:00", "09:00", "earlier").expect("add");

    let removed = DeleteLogic::apply(&store, 1).expect("delete first shown");
    assert_eq!(removed.desc, "earlier");

    EditLogic::apply_entry(&store, 1, "14:00", "16:00", "longer").expect("edit");
    assert_eq!(
        store.get_logs().expect("logs"),
        vec![LogEntry::new("14:00", "16:00", "longer")]
    );
}

#[test]
fn test_logic_validation_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    assert!(matches!(
        AddLogic::apply(&store, "25:00", "10:00", "x"),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        AddLogic::apply(&store, "09:00", "10:00", "   "),
        Err(AppError::EmptyField(_))
    ));
    assert!(matches!(
        DeleteLogic::apply(&store, 1),
        Err(AppError::InvalidPosition { position: 1, .. })
    ));
    assert!(matches!(
        JiraLogic::delete(&store, 0, RefList::Today),
        Err(AppError::InvalidPosition { position: 0, .. })
    ));
    assert!(matches!(
        JiraLogic::add(&store, "", RefList::Next),
        Err(AppError::EmptyField(_))
    ));
    assert!(!store.path().exists());
}

#[test]
fn test_document_keeps_unicode_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");

    store.append_log("09:00", "10:00", "會議").expect("append");

    let raw = fs::read_to_string(store.path()).expect("read");
    assert!(raw.contains("會議"));
    assert!(raw.contains("\n  \"2026-10-16\""));
}
