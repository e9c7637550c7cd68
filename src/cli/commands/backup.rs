use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::backup(store, file, *compress)?;
    }

    Ok(())
}
