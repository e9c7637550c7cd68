use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::post::PostLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::clipboard::copy_text;
use crate::ui::messages::{info, success};

/// `post` and `descs`: print the text, optionally copy it.
pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    match cmd {
        Commands::Post { copy } => {
            let post = PostLogic::generate(store, &cfg.planned_marker)?;
            println!("{post}");
            if *copy {
                copy_text(&post)?;
                success("Status post copied to clipboard");
            }
        }
        Commands::Descs { copy } => {
            let descs = PostLogic::descriptions(store)?;
            if descs.is_empty() {
                info("No work descriptions to copy today.");
                return Ok(());
            }
            println!("{descs}");
            if *copy {
                copy_text(&descs)?;
                success("All descriptions copied to clipboard");
            }
        }
        _ => {}
    }

    Ok(())
}
