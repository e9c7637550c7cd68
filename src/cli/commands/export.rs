use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Store;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(store, *format, file, *force)?;
    }

    Ok(())
}
