use serde::{Deserialize, Serialize};

/// One time-blocked work entry. Times are kept as the `HH:MM` strings the
/// user typed; they are only parsed when hours are computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LogEntry {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub desc: String,
}

impl LogEntry {
    pub fn new(start: &str, end: &str, desc: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            desc: desc.to_string(),
        }
    }
}
