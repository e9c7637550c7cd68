pub mod day_record;
pub mod log_entry;
pub mod ref_list;

pub use day_record::{DayRecord, Document};
pub use log_entry::LogEntry;
pub use ref_list::RefList;
