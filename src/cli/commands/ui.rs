use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::tui::run_dashboard;

/// Open the interactive window.
pub fn handle(cfg: &Config, store: &Store) -> AppResult<()> {
    run_dashboard(store, cfg)
}
