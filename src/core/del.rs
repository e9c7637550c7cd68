use crate::core::view::storage_index;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::store::Store;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the log entry shown at 1-based `position` of the sorted list.
    pub fn apply(store: &Store, position: usize) -> AppResult<LogEntry> {
        let logs = store.get_logs()?;
        let index = storage_index(&logs, position).ok_or_else(|| AppError::position("log", position))?;

        store
            .delete_log(index)?
            .ok_or_else(|| AppError::position("log", position))
    }
}
