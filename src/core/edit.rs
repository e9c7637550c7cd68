use crate::core::validate::{required_text, time_field};
use crate::core::view::storage_index;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::store::Store;

/// Edits of an existing log entry, addressed by its 1-based position in the
/// sorted list.
pub struct EditLogic;

impl EditLogic {
    /// Change only start and end; the description is kept.
    pub fn apply_time(store: &Store, position: usize, start: &str, end: &str) -> AppResult<LogEntry> {
        let start = time_field(start, "start")?;
        let end = time_field(end, "end")?;

        let logs = store.get_logs()?;
        let index = storage_index(&logs, position).ok_or_else(|| AppError::position("log", position))?;

        if !store.update_log(index, &start, &end)? {
            return Err(AppError::position("log", position));
        }
        Ok(LogEntry::new(&start, &end, &logs[index].desc))
    }

    /// Replace start, end and description.
    pub fn apply_entry(
        store: &Store,
        position: usize,
        start: &str,
        end: &str,
        desc: &str,
    ) -> AppResult<LogEntry> {
        let start = time_field(start, "start")?;
        let end = time_field(end, "end")?;
        let desc = required_text(desc, "description")?;

        let logs = store.get_logs()?;
        let index = storage_index(&logs, position).ok_or_else(|| AppError::position("log", position))?;

        if !store.update_log_entry(index, &start, &end, &desc)? {
            return Err(AppError::position("log", position));
        }
        Ok(LogEntry::new(&start, &end, &desc))
    }
}
