use crate::cli::commands::show;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::formatting::log_line;

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Edit {
        position,
        start,
        end,
        desc,
    } = cmd
    {
        let entry = match desc {
            Some(d) => EditLogic::apply_entry(store, *position, start, end, d)?,
            None => EditLogic::apply_time(store, *position, start, end)?,
        };

        success(format!(
            "Entry #{} updated: {}",
            position,
            log_line(&entry.start, &entry.end, &entry.desc)
        ));
        show::render(store, cfg)?;
    }

    Ok(())
}
