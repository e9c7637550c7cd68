//! rDailyLog library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::Store;
use ui::messages::warning;
use utils::date::require_date;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, store: &Store) -> AppResult<()> {
    let Some(cmd) = &cli.command else {
        return cli::commands::ui::handle(cfg, store);
    };

    match cmd {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Ui => cli::commands::ui::handle(cfg, store),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cmd, store),
        Commands::Add { .. } => cli::commands::add::handle(cmd, cfg, store),
        Commands::Edit { .. } => cli::commands::edit::handle(cmd, cfg, store),
        Commands::Del { .. } => cli::commands::del::handle(cmd, cfg, store),
        Commands::Jira { .. } => cli::commands::jira::handle(cmd, cfg, store),
        Commands::NextDate { .. } => cli::commands::next_date::handle(cmd, cfg, store),
        Commands::Show => cli::commands::show::handle(cmd, cfg, store),
        Commands::Post { .. } | Commands::Descs { .. } => {
            cli::commands::post::handle(cmd, cfg, store)
        }
        Commands::Prune { .. } => cli::commands::prune::handle(cmd, cfg, store),
        Commands::Backup { .. } => cli::commands::backup::handle(cmd, store),
        Commands::Export { .. } => cli::commands::export::handle(cmd, store),
    }
}

/// Create the data file if missing and apply the retention window.
/// Runs before every command that works on the data document.
fn startup(cli: &Cli, cfg: &Config, store: &Store) -> AppResult<()> {
    if matches!(
        cli.command,
        Some(Commands::Init | Commands::Config { .. } | Commands::Log { .. })
    ) {
        return Ok(());
    }

    store.ensure_initialized()?;

    // An explicit `prune` reports its own outcome.
    if !matches!(cli.command, Some(Commands::Prune { .. })) {
        let outcome = store.prune(cfg.retention_days)?;
        for key in &outcome.skipped {
            warning(format!("Kept '{}': not a YYYY-MM-DD date", key));
        }
    }
    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    let mut store = Store::from_config(&cfg);
    if let Some(today) = &cli.today {
        store = store.with_today(require_date(today)?);
    }

    startup(&cli, &cfg, &store)?;
    dispatch(&cli, &cfg, &store)
}
