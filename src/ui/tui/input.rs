//! Key handling: every submitted form goes through the same core logic as
//! the command line, then the window is refreshed from the store.

use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::core::jira::JiraLogic;
use crate::core::plan::NextDateLogic;
use crate::core::post::PostLogic;
use crate::core::validate::time_field;
use crate::errors::{AppError, AppResult};
use crate::models::RefList;
use crate::store::Store;
use crate::ui::clipboard::copy_text;
use crate::ui::tui::app::{App, InputMode, Pane, Popup, PopupLevel, PromptKind, PromptState};
use crate::utils::formatting::log_line;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Errors the user can act on; anything else (I/O, corrupt data file)
/// propagates and ends the session.
fn is_user_error(e: &AppError) -> bool {
    matches!(
        e,
        AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::EmptyField(_)
            | AppError::InvalidPosition { .. }
            | AppError::NoRecordForToday(_)
            | AppError::Clipboard(_)
    )
}

/// Returns `true` when the application should quit.
pub fn handle_key(app: &mut App, key: KeyEvent, store: &Store) -> AppResult<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.mode.clone() {
        InputMode::Popup(popup) => {
            handle_popup_key(app, key.code, popup);
            Ok(false)
        }
        InputMode::Prompt(prompt) => {
            handle_prompt_key(app, key.code, prompt, store)?;
            Ok(false)
        }
        InputMode::Normal => handle_normal_key(app, key, store),
    }
}

fn handle_popup_key(app: &mut App, code: KeyCode, popup: Popup) {
    if matches!(code, KeyCode::Esc | KeyCode::Enter) {
        app.mode = match popup.resume {
            Some(prompt) => InputMode::Prompt(prompt),
            None => InputMode::Normal,
        };
    }
}

fn handle_prompt_key(
    app: &mut App,
    code: KeyCode,
    mut prompt: PromptState,
    store: &Store,
) -> AppResult<()> {
    match code {
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
            app.status = "Input cancelled".to_string();
        }
        KeyCode::Backspace => {
            prompt.input.pop();
            app.mode = InputMode::Prompt(prompt);
        }
        KeyCode::Char(c) => {
            prompt.input.push(c);
            app.mode = InputMode::Prompt(prompt);
        }
        KeyCode::Enter => submit_prompt(app, prompt, store)?,
        _ => {}
    }
    Ok(())
}

/// Run `result`; user errors reopen `prompt` behind an error popup.
/// Returns `None` when the prompt was rejected.
fn checked<T>(app: &mut App, prompt: &PromptState, result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e @ AppError::InvalidPosition { .. }) => {
            app.popup(PopupLevel::Warning, "Warning", e.to_string());
            Ok(None)
        }
        Err(e) if is_user_error(&e) => {
            app.reject(prompt.clone(), e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn next_prompt(app: &mut App, title: &str, kind: PromptKind, prefill: &str) {
    app.mode = InputMode::Prompt(PromptState::new(title, kind).with_input(prefill));
}

fn submit_prompt(app: &mut App, prompt: PromptState, store: &Store) -> AppResult<()> {
    let input = prompt.input.clone();

    match prompt.kind.clone() {
        PromptKind::AddStart => {
            if let Some(start) = checked(app, &prompt, time_field(&input, "start"))? {
                next_prompt(app, "End time (HH:MM)", PromptKind::AddEnd { start }, "");
            }
        }
        PromptKind::AddEnd { start } => {
            if let Some(end) = checked(app, &prompt, time_field(&input, "end"))? {
                next_prompt(app, "Description", PromptKind::AddDesc { start, end }, "");
            }
        }
        PromptKind::AddDesc { start, end } => {
            let result = AddLogic::apply(store, &start, &end, &input);
            if let Some(entry) = checked(app, &prompt, result)? {
                app.mode = InputMode::Normal;
                app.status = format!("Added: {}", log_line(&entry.start, &entry.end, &entry.desc));
                app.refresh(store)?;
            }
        }
        PromptKind::EditStart { position, end, desc } => {
            if let Some(start) = checked(app, &prompt, time_field(&input, "start"))? {
                let kind = PromptKind::EditEnd { position, start, desc };
                next_prompt(app, "End time (HH:MM)", kind, &end);
            }
        }
        PromptKind::EditEnd { position, start, desc } => {
            if let Some(end) = checked(app, &prompt, time_field(&input, "end"))? {
                let kind = PromptKind::EditDesc { position, start, end };
                next_prompt(app, "Description", kind, &desc);
            }
        }
        PromptKind::EditDesc { position, start, end } => {
            let result = EditLogic::apply_entry(store, position, &start, &end, &input);
            if checked(app, &prompt, result)?.is_some() {
                app.popup(PopupLevel::Success, "Updated", "Work log entry updated");
                app.refresh(store)?;
            }
        }
        PromptKind::TimeStart { position, end } => {
            if let Some(start) = checked(app, &prompt, time_field(&input, "start"))? {
                next_prompt(app, "End time (HH:MM)", PromptKind::TimeEnd { position, start }, &end);
            }
        }
        PromptKind::TimeEnd { position, start } => {
            let result = EditLogic::apply_time(store, position, &start, &input);
            if let Some(entry) = checked(app, &prompt, result)? {
                app.mode = InputMode::Normal;
                app.status = format!("Time updated: {} → {}", entry.start, entry.end);
                app.refresh(store)?;
            }
        }
        PromptKind::Jira(list) => {
            let result = JiraLogic::add(store, &input, list);
            if let Some(link) = checked(app, &prompt, result)? {
                app.mode = InputMode::Normal;
                app.status = format!("Added to {}: {link}", list.label());
                app.refresh(store)?;
            }
        }
        PromptKind::NextDate => {
            let result = NextDateLogic::set(store, &input);
            if let Some(date) = checked(app, &prompt, result)? {
                app.popup(
                    PopupLevel::Success,
                    "Updated",
                    format!("Next date set to {date}"),
                );
                app.refresh(store)?;
            }
        }
    }

    Ok(())
}

fn handle_normal_key(app: &mut App, key: KeyEvent, store: &Store) -> AppResult<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('a') => start_add(app),
        KeyCode::Char('e') => start_edit(app, false),
        KeyCode::Char('t') => start_edit(app, true),
        KeyCode::Char('d') | KeyCode::Delete => delete_selected(app, store)?,
        KeyCode::Char('c') => carry_forward(app, store)?,
        KeyCode::Char('n') => {
            let current = app.view.next_date.clone();
            next_prompt(app, "Next date (YYYY-MM-DD)", PromptKind::NextDate, &current);
        }
        KeyCode::Char('g') => generate_post(app, store)?,
        KeyCode::Char('p') => copy_post(app),
        KeyCode::Char('y') => copy_descriptions(app, store)?,
        KeyCode::Char('r') => {
            app.refresh(store)?;
            app.status = "Refreshed".to_string();
        }
        _ => {}
    }
    Ok(false)
}

fn start_add(app: &mut App) {
    match app.focus.ref_list() {
        None => next_prompt(app, "Start time (HH:MM)", PromptKind::AddStart, ""),
        Some(list) => {
            let title = match list {
                RefList::Today => "Jira link for today",
                RefList::Next => "Jira link for the next working day",
            };
            next_prompt(app, title, PromptKind::Jira(list), "");
        }
    }
}

fn start_edit(app: &mut App, time_only: bool) {
    if app.focus != Pane::Logs {
        app.status = "Only work log entries can be edited".to_string();
        return;
    }
    let Some(position) = app.selected_position() else {
        app.popup(
            PopupLevel::Warning,
            "Warning",
            "Select the work log entry to edit first",
        );
        return;
    };

    let entry = app.view.rows[position - 1].entry.clone();
    if time_only {
        let kind = PromptKind::TimeStart { position, end: entry.end };
        next_prompt(app, "Start time (HH:MM)", kind, &entry.start);
    } else {
        let kind = PromptKind::EditStart {
            position,
            end: entry.end,
            desc: entry.desc,
        };
        next_prompt(app, "Start time (HH:MM)", kind, &entry.start);
    }
}

fn delete_selected(app: &mut App, store: &Store) -> AppResult<()> {
    let Some(position) = app.selected_position() else {
        app.popup(PopupLevel::Warning, "Warning", "Select the entry to delete first");
        return Ok(());
    };

    let result = match app.focus.ref_list() {
        None => DeleteLogic::apply(store, position)
            .map(|e| format!("Deleted: {}", log_line(&e.start, &e.end, &e.desc))),
        Some(list) => JiraLogic::delete(store, position, list)
            .map(|link| format!("Deleted Jira: {link}")),
    };

    match result {
        Ok(msg) => {
            app.refresh(store)?;
            app.popup(PopupLevel::Success, "Deleted", msg);
        }
        Err(e) if is_user_error(&e) => app.popup(PopupLevel::Warning, "Warning", e.to_string()),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn carry_forward(app: &mut App, store: &Store) -> AppResult<()> {
    match JiraLogic::carry(store)? {
        None => app.popup(
            PopupLevel::Info,
            "Info",
            "No earlier day with records to copy from",
        ),
        Some((prev, outcome)) => {
            app.refresh(store)?;
            app.popup(
                PopupLevel::Success,
                "Copied",
                format!(
                    "Copied from {prev}: Jira ({}) and next Jira ({})",
                    outcome.jira, outcome.next_jira
                ),
            );
        }
    }
    Ok(())
}

fn generate_post(app: &mut App, store: &Store) -> AppResult<()> {
    match PostLogic::generate(store, &app.planned_marker) {
        Ok(post) => {
            app.post_text = post;
            app.status = "Status post generated".to_string();
        }
        Err(e) if is_user_error(&e) => app.popup(PopupLevel::Error, "Error", e.to_string()),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn copy_post(app: &mut App) {
    let content = app.post_text.trim().to_string();
    if content.is_empty() {
        app.status = "No status post to copy".to_string();
        return;
    }
    match copy_text(&content) {
        Ok(()) => app.popup(PopupLevel::Success, "Copied", "Status post copied to clipboard"),
        Err(e) => app.popup(PopupLevel::Error, "Error", e.to_string()),
    }
}

fn copy_descriptions(app: &mut App, store: &Store) -> AppResult<()> {
    let content = PostLogic::descriptions(store)?;
    if content.is_empty() {
        app.popup(PopupLevel::Info, "Info", "No work descriptions to copy today");
        return Ok(());
    }
    match copy_text(&content) {
        Ok(()) => app.popup(PopupLevel::Success, "Copied", "All descriptions copied to clipboard"),
        Err(e) => app.popup(PopupLevel::Error, "Error", e.to_string()),
    }
    Ok(())
}
