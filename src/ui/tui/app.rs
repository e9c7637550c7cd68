//! State of the interactive window.

use crate::config::Config;
use crate::core::view::DayView;
use crate::errors::AppResult;
use crate::models::RefList;
use crate::store::Store;

/// Panel with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Logs,
    Jira,
    NextJira,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Logs => Pane::Jira,
            Pane::Jira => Pane::NextJira,
            Pane::NextJira => Pane::Logs,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Logs => Pane::NextJira,
            Pane::Jira => Pane::Logs,
            Pane::NextJira => Pane::Jira,
        }
    }

    pub fn ref_list(self) -> Option<RefList> {
        match self {
            Pane::Logs => None,
            Pane::Jira => Some(RefList::Today),
            Pane::NextJira => Some(RefList::Next),
        }
    }
}

/// What a text prompt feeds into. Multi-field forms chain prompts and carry
/// the values collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    AddStart,
    AddEnd { start: String },
    AddDesc { start: String, end: String },
    EditStart { position: usize, end: String, desc: String },
    EditEnd { position: usize, start: String, desc: String },
    EditDesc { position: usize, start: String, end: String },
    TimeStart { position: usize, end: String },
    TimeEnd { position: usize, start: String },
    Jira(RefList),
    NextDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub title: String,
    pub input: String,
    pub kind: PromptKind,
}

impl PromptState {
    pub fn new(title: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            title: title.into(),
            input: String::new(),
            kind,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Modal message. While shown, every key except Esc/Enter is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub level: PopupLevel,
    pub title: String,
    pub text: String,
    /// Prompt to reopen once the popup is dismissed (failed validation)
    pub resume: Option<PromptState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Prompt(PromptState),
    Popup(Popup),
}

pub struct App {
    pub planned_marker: String,
    pub view: DayView,
    pub focus: Pane,
    pub log_index: usize,
    pub jira_index: usize,
    pub next_jira_index: usize,
    pub mode: InputMode,
    /// Content of the post panel; regenerated on refresh while today has
    /// references, or on demand.
    pub post_text: String,
    pub status: String,
}

impl App {
    pub fn new(store: &Store, cfg: &Config) -> AppResult<Self> {
        let view = DayView::load(store, &cfg.planned_marker)?;
        let mut app = Self {
            planned_marker: cfg.planned_marker.clone(),
            post_text: view.post.clone().unwrap_or_default(),
            view,
            focus: Pane::Logs,
            log_index: 0,
            jira_index: 0,
            next_jira_index: 0,
            mode: InputMode::Normal,
            status: String::new(),
        };
        app.clamp_selection();
        Ok(app)
    }

    /// Re-read everything from the store.
    pub fn refresh(&mut self, store: &Store) -> AppResult<()> {
        self.view = DayView::load(store, &self.planned_marker)?;
        if let Some(post) = &self.view.post {
            self.post_text = post.clone();
        }
        self.clamp_selection();
        Ok(())
    }

    pub fn pane_len(&self, pane: Pane) -> usize {
        match pane {
            Pane::Logs => self.view.rows.len(),
            Pane::Jira => self.view.jira.len(),
            Pane::NextJira => self.view.next_jira.len(),
        }
    }

    pub fn selected(&self, pane: Pane) -> usize {
        match pane {
            Pane::Logs => self.log_index,
            Pane::Jira => self.jira_index,
            Pane::NextJira => self.next_jira_index,
        }
    }

    fn selected_mut(&mut self, pane: Pane) -> &mut usize {
        match pane {
            Pane::Logs => &mut self.log_index,
            Pane::Jira => &mut self.jira_index,
            Pane::NextJira => &mut self.next_jira_index,
        }
    }

    /// 1-based position of the selection in the focused list, if any.
    pub fn selected_position(&self) -> Option<usize> {
        let len = self.pane_len(self.focus);
        (len > 0).then(|| self.selected(self.focus).min(len - 1) + 1)
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.pane_len(self.focus);
        if len == 0 {
            return;
        }
        let focus = self.focus;
        let current = self.selected(focus) as i64;
        let next = (current + delta as i64).clamp(0, len as i64 - 1);
        *self.selected_mut(focus) = next as usize;
    }

    pub fn clamp_selection(&mut self) {
        for pane in [Pane::Logs, Pane::Jira, Pane::NextJira] {
            let len = self.pane_len(pane);
            let sel = self.selected_mut(pane);
            *sel = (*sel).min(len.saturating_sub(1));
        }
    }

    pub fn popup(&mut self, level: PopupLevel, title: &str, text: impl Into<String>) {
        self.mode = InputMode::Popup(Popup {
            level,
            title: title.to_string(),
            text: text.into(),
            resume: None,
        });
    }

    /// Show a validation error and reopen `prompt` afterwards.
    pub fn reject(&mut self, prompt: PromptState, text: impl Into<String>) {
        self.mode = InputMode::Popup(Popup {
            level: PopupLevel::Error,
            title: "Invalid input".to_string(),
            text: text.into(),
            resume: Some(prompt),
        });
    }
}
