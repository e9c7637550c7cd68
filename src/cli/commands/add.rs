use crate::cli::commands::show;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::formatting::log_line;

/// Add a work log entry to today.
pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Add { start, end, desc } = cmd {
        let entry = AddLogic::apply(store, start, end, &desc.join(" "))?;
        success(format!(
            "Added: {}",
            log_line(&entry.start, &entry.end, &entry.desc)
        ));
        show::render(store, cfg)?;
    }

    Ok(())
}
