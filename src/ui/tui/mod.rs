//! Interactive terminal window: the day's logs, references, next date and
//! status post, driven by single-key actions and modal prompts.

pub mod app;
pub mod draw;
pub mod input;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use app::App;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

pub fn run_dashboard(store: &Store, cfg: &Config) -> AppResult<()> {
    let mut app = App::new(store, cfg)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, &mut app, store);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &Store,
) -> AppResult<()> {
    loop {
        terminal.draw(|frame| draw::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && input::handle_key(app, key, store)?
        {
            break;
        }
    }

    Ok(())
}
