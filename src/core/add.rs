use crate::core::validate::{required_text, time_field};
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::store::Store;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the three fields and append the entry to today's record.
    pub fn apply(store: &Store, start: &str, end: &str, desc: &str) -> AppResult<LogEntry> {
        let start = time_field(start, "start")?;
        let end = time_field(end, "end")?;
        let desc = required_text(desc, "description")?;

        store.append_log(&start, &end, &desc)?;
        Ok(LogEntry::new(&start, &end, &desc))
    }
}
