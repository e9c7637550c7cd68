use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty JSON data file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    println!("⚙️  Initializing rDailyLog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data file   : {}", cfg.data_file);

    let store = Store::from_config(&cfg);
    if store.ensure_initialized()? {
        success(format!("Data file created at {}", cfg.data_file));
    } else {
        info(format!("Data file already present at {}", cfg.data_file));
    }

    println!("🎉 rDailyLog initialization completed!");
    Ok(())
}
