use crate::cli::commands::show;
use crate::cli::parser::{Commands, JiraAction};
use crate::config::Config;
use crate::core::jira::JiraLogic;
use crate::errors::AppResult;
use crate::models::RefList;
use crate::store::Store;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Jira { action } = cmd {
        match action {
            JiraAction::Add { link, next } => {
                let list = RefList::from_flag(*next);
                let link = JiraLogic::add(store, link, list)?;
                success(format!("Added to {}: {}", list.label(), link));
            }
            JiraAction::Del { position, next } => {
                let list = RefList::from_flag(*next);
                let removed = JiraLogic::delete(store, *position, list)?;
                success(format!("Deleted Jira: {}", removed));
            }
            JiraAction::Carry => match JiraLogic::carry(store)? {
                Some((prev, outcome)) if outcome.total() == 0 => {
                    info(format!("Today already holds every reference of {}", prev));
                }
                Some((prev, outcome)) => success(format!(
                    "Copied from {}: Jira ({}) and next Jira ({})",
                    prev, outcome.jira, outcome.next_jira
                )),
                None => {
                    info("No earlier day with records to copy from.");
                    return Ok(());
                }
            },
        }
        show::render(store, cfg)?;
    }

    Ok(())
}
