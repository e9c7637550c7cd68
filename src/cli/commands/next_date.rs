use crate::cli::commands::show;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::NextDateLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::NextDate { date } = cmd {
        match date {
            Some(d) => {
                let d = NextDateLogic::set(store, d)?;
                success(format!("Next date set to {}", d));
                show::render(store, cfg)?;
            }
            None => println!("{}", NextDateLogic::get(store)?),
        }
    }

    Ok(())
}
