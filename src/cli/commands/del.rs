use crate::cli::commands::show;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::formatting::log_line;

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Del { position } = cmd {
        let removed = DeleteLogic::apply(store, *position)?;
        success(format!(
            "Deleted: {}",
            log_line(&removed.start, &removed.end, &removed.desc)
        ));
        show::render(store, cfg)?;
    }

    Ok(())
}
