mod common;
use common::store_in;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rdailylog::config::Config;
use rdailylog::models::{LogEntry, RefList};
use rdailylog::store::Store;
use rdailylog::ui::tui::app::{App, InputMode, Pane, PopupLevel, PromptKind};
use rdailylog::ui::tui::input::handle_key;

fn press(app: &mut App, store: &Store, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), store).expect("key handled")
}

fn type_text(app: &mut App, store: &Store, text: &str) {
    for c in text.chars() {
        press(app, store, KeyCode::Char(c));
    }
}

fn submit(app: &mut App, store: &Store, text: &str) {
    type_text(app, store, text);
    press(app, store, KeyCode::Enter);
}

/// Clear a prefilled prompt
fn clear_input(app: &mut App, store: &Store) {
    while let InputMode::Prompt(p) = &app.mode {
        if p.input.is_empty() {
            break;
        }
        press(app, store, KeyCode::Backspace);
    }
}

fn setup(name: &str) -> (tempfile::TempDir, Store, App) {
    let dir = tempfile::Builder::new().prefix(name).tempdir().expect("tempdir");
    let store = store_in(&dir, "2026-10-16");
    let app = App::new(&store, &Config::default()).expect("app");
    (dir, store, app)
}

#[test]
fn test_add_form_appends_entry() {
    let (_dir, store, mut app) = setup("tui_add");

    press(&mut app, &store, KeyCode::Char('a'));
    submit(&mut app, &store, "09:00");
    submit(&mut app, &store, "10:30");
    submit(&mut app, &store, "standup");

    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(
        store.get_logs().expect("logs"),
        vec![LogEntry::new("09:00", "10:30", "standup")]
    );
    assert_eq!(app.view.rows.len(), 1);
    assert_eq!(app.view.total_hours, Some(1.5));
}

#[test]
fn test_invalid_time_reopens_prompt() {
    let (_dir, store, mut app) = setup("tui_invalid_time");

    press(&mut app, &store, KeyCode::Char('a'));
    submit(&mut app, &store, "9am");

    match &app.mode {
        InputMode::Popup(popup) => {
            assert_eq!(popup.level, PopupLevel::Error);
            assert!(popup.text.contains("Invalid time format"));
        }
        other => panic!("expected error popup, got {other:?}"),
    }

    press(&mut app, &store, KeyCode::Esc);
    match &app.mode {
        InputMode::Prompt(prompt) => {
            assert_eq!(prompt.kind, PromptKind::AddStart);
            assert_eq!(prompt.input, "9am");
        }
        other => panic!("expected prompt, got {other:?}"),
    }
    assert!(store.get_logs().expect("logs").is_empty());
}

#[test]
fn test_escape_cancels_form() {
    let (_dir, store, mut app) = setup("tui_cancel");

    press(&mut app, &store, KeyCode::Char('a'));
    submit(&mut app, &store, "09:00");
    press(&mut app, &store, KeyCode::Esc);

    assert_eq!(app.mode, InputMode::Normal);
    assert!(!store.path().exists());
}

#[test]
fn test_edit_without_entries_warns() {
    let (_dir, store, mut app) = setup("tui_edit_empty");

    press(&mut app, &store, KeyCode::Char('e'));

    match &app.mode {
        InputMode::Popup(popup) => assert_eq!(popup.level, PopupLevel::Warning),
        other => panic!("expected warning popup, got {other:?}"),
    }
}

#[test]
fn test_time_edit_keeps_description() {
    let (_dir, store, mut app) = setup("tui_time_edit");
    store.append_log("14:00", "15:00", "later").expect("append");
    store.append_log("08:00", "09:00", "earlier").expect("append");
    app.refresh(&store).expect("refresh");

    // second shown row is the first stored entry
    press(&mut app, &store, KeyCode::Down);
    press(&mut app, &store, KeyCode::Char('t'));
    clear_input(&mut app, &store);
    submit(&mut app, &store, "13:30");
    clear_input(&mut app, &store);
    submit(&mut app, &store, "15:30");

    assert_eq!(
        store.get_logs().expect("logs"),
        vec![
            LogEntry::new("13:30", "15:30", "later"),
            LogEntry::new("08:00", "09:00", "earlier"),
        ]
    );
}

#[test]
fn test_delete_selected_reference() {
    let (_dir, store, mut app) = setup("tui_delete_ref");
    store.add_reference("JIRA-1", RefList::Today).expect("add");
    store.add_reference("JIRA-2", RefList::Today).expect("add");
    app.refresh(&store).expect("refresh");

    press(&mut app, &store, KeyCode::Tab);
    assert_eq!(app.focus, Pane::Jira);
    press(&mut app, &store, KeyCode::Down);
    press(&mut app, &store, KeyCode::Char('d'));

    assert_eq!(store.get_references(RefList::Today).expect("refs"), vec!["JIRA-1"]);
    assert_eq!(app.view.jira, vec!["JIRA-1"]);
    assert_eq!(app.jira_index, 0);
}

#[test]
fn test_add_reference_to_next_list_and_generate_post() {
    let (_dir, store, mut app) = setup("tui_next_ref");

    press(&mut app, &store, KeyCode::BackTab);
    assert_eq!(app.focus, Pane::NextJira);
    press(&mut app, &store, KeyCode::Char('a'));
    submit(&mut app, &store, "JIRA-3");

    assert_eq!(store.get_references(RefList::Next).expect("refs"), vec!["JIRA-3"]);
    assert!(app.post_text.contains("2026/10/19 預計\n1. JIRA-3"));

    press(&mut app, &store, KeyCode::Char('g'));
    assert!(app.post_text.starts_with("2026/10/16\n"));
}

#[test]
fn test_generate_post_without_record_shows_error() {
    let (_dir, store, mut app) = setup("tui_post_empty");

    press(&mut app, &store, KeyCode::Char('g'));

    match &app.mode {
        InputMode::Popup(popup) => {
            assert_eq!(popup.level, PopupLevel::Error);
            assert!(popup.text.contains("No record found for today"));
        }
        other => panic!("expected error popup, got {other:?}"),
    }
}

#[test]
fn test_next_date_prompt_validates() {
    let (_dir, store, mut app) = setup("tui_next_date");

    press(&mut app, &store, KeyCode::Char('n'));
    clear_input(&mut app, &store);
    submit(&mut app, &store, "next week");
    assert!(matches!(app.mode, InputMode::Popup(_)));

    press(&mut app, &store, KeyCode::Enter);
    clear_input(&mut app, &store);
    submit(&mut app, &store, "2099-01-01");

    assert_eq!(store.get_next_date().expect("next date"), "2099-01-01");
    assert_eq!(app.view.next_date, "2099-01-01");
}

#[test]
fn test_carry_forward_key() {
    let (_dir, store, mut app) = setup("tui_carry");

    press(&mut app, &store, KeyCode::Char('c'));
    match &app.mode {
        InputMode::Popup(popup) => assert_eq!(popup.level, PopupLevel::Info),
        other => panic!("expected info popup, got {other:?}"),
    }
}

#[test]
fn test_quit_keys() {
    let (_dir, store, mut app) = setup("tui_quit");

    assert!(press(&mut app, &store, KeyCode::Char('q')));
    assert!(
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &store
        )
        .expect("key handled")
    );
}
