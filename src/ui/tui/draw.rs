use crate::ui::tui::app::{App, InputMode, Pane, Popup, PopupLevel, PromptState};
use crate::utils::date::{format_display_date, to_key};
use crate::utils::formatting::{format_hours, log_line};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

const FOCUSED_BORDER: Color = Color::Yellow;
const INACTIVE_BORDER: Color = Color::DarkGray;
const HIGHLIGHT_BG: Color = Color::Rgb(42, 45, 52);

pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(3),
        ])
        .split(frame.size());

    render_title(frame, rows[0], app);
    render_logs(frame, rows[1], app);

    let refs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_refs(frame, refs[0], app, Pane::Jira, "📌 Today's Jira", &app.view.jira);
    render_refs(frame, refs[1], app, Pane::NextJira, "📍 Next Jira", &app.view.next_jira);

    render_next_date(frame, rows[3], app);
    render_post(frame, rows[4], app);
    render_footer(frame, rows[5], app);

    match &app.mode {
        InputMode::Prompt(prompt) => render_prompt(frame, prompt),
        InputMode::Popup(popup) => render_popup(frame, popup),
        InputMode::Normal => {}
    }
}

fn muted() -> Style {
    Style::default().fg(INACTIVE_BORDER)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUSED_BORDER)
    } else {
        Style::default().fg(INACTIVE_BORDER)
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled("📅 DailyLog ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format_display_date(&to_key(app.view.today))),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

fn render_logs(frame: &mut Frame, area: Rect, app: &App) {
    let total = match app.view.total_hours {
        Some(h) => format!("{} h", format_hours(h)),
        None => "? h (invalid time)".to_string(),
    };

    let items: Vec<ListItem> = if app.view.rows.is_empty() {
        vec![ListItem::new("(no entries yet, press a to add)").style(muted())]
    } else {
        app.view
            .rows
            .iter()
            .map(|row| ListItem::new(log_line(&row.entry.start, &row.entry.end, &row.entry.desc)))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::raw("✔️ Today's work log: "),
            Span::styled(total, Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .border_style(border_style(app.focus == Pane::Logs));

    render_list(frame, area, app, Pane::Logs, List::new(items).block(block));
}

fn render_refs(frame: &mut Frame, area: Rect, app: &App, pane: Pane, title: &str, refs: &[String]) {
    let items: Vec<ListItem> = if refs.is_empty() {
        vec![ListItem::new("(empty)").style(muted())]
    } else {
        refs.iter()
            .enumerate()
            .map(|(i, link)| ListItem::new(format!("{}. {}", i + 1, link)))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style(app.focus == pane));

    render_list(frame, area, app, pane, List::new(items).block(block));
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, pane: Pane, list: List) {
    let mut state = ListState::default();
    if app.pane_len(pane) > 0 && app.focus == pane {
        state.select(Some(app.selected(pane)));
    }
    let list = list.highlight_style(
        Style::default()
            .bg(HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_next_date(frame: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(Line::from(vec![
        Span::raw("📆 Next date (YYYY-MM-DD): "),
        Span::styled(app.view.next_date.clone(), Style::default().fg(Color::Cyan)),
        Span::styled("   n to change", muted()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(para, area);
}

fn render_post(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.post_text.is_empty() {
        Text::styled("(g to generate, p to copy)", muted())
    } else {
        Text::from(app.post_text.as_str())
    };

    let para = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("📍 Status post"));
    frame.render_widget(para, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(
            "Tab pane | ↑/↓ select | a add | e edit | t time | d delete | c copy last Jira | n next date | g post | p copy post | y copy descs | q quit",
        ),
        Line::styled(app.status.clone(), muted()),
    ];
    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn render_prompt(frame: &mut Frame, prompt: &PromptState) {
    let area = centered_rect(60, 20, frame.size());
    let block = Block::default()
        .title(prompt.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(format!("> {}█", prompt.input)), chunks[0]);
    frame.render_widget(
        Paragraph::new("Enter confirm | Esc cancel")
            .alignment(Alignment::Center)
            .style(muted().add_modifier(Modifier::ITALIC)),
        chunks[1],
    );
}

fn render_popup(frame: &mut Frame, popup: &Popup) {
    let area = centered_rect(60, 30, frame.size());

    let color = match popup.level {
        PopupLevel::Info => Color::Blue,
        PopupLevel::Success => Color::Green,
        PopupLevel::Warning => Color::Yellow,
        PopupLevel::Error => Color::Red,
    };

    let block = Block::default()
        .title(popup.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color).bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let para = Paragraph::new(popup.text.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    frame.render_widget(para, chunks[0]);

    let hint = Paragraph::new("Press Enter or Esc to dismiss")
        .alignment(Alignment::Center)
        .style(muted().add_modifier(Modifier::ITALIC));
    frame.render_widget(hint, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
