use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Prune { days } = cmd {
        let days = days.unwrap_or(cfg.retention_days);
        let outcome = store.prune(days)?;

        for key in &outcome.skipped {
            warning(format!("Kept '{}': not a YYYY-MM-DD date", key));
        }

        if outcome.removed.is_empty() {
            info(format!("Nothing older than {} days.", days));
        } else {
            success(format!(
                "Removed {} record(s): {}",
                outcome.removed.len(),
                outcome.removed.join(", ")
            ));
        }
    }

    Ok(())
}
