use crate::core::calculator::workdays::next_working_day;
use crate::models::log_entry::LogEntry;
use crate::models::ref_list::RefList;
use crate::utils::date::to_key;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything recorded for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DayRecord {
    #[serde(default)]
    pub jira: Vec<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub next_date: String,
    #[serde(default)]
    pub next_jira: Vec<String>,
    /// Fields this tool does not know about, written back unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DayRecord {
    /// Empty record for `date`, planned for the following working day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            next_date: to_key(next_working_day(date)),
            ..Self::default()
        }
    }

    pub fn refs(&self, list: RefList) -> &Vec<String> {
        match list {
            RefList::Today => &self.jira,
            RefList::Next => &self.next_jira,
        }
    }

    pub fn refs_mut(&mut self, list: RefList) -> &mut Vec<String> {
        match list {
            RefList::Today => &mut self.jira,
            RefList::Next => &mut self.next_jira,
        }
    }

    pub fn has_refs(&self) -> bool {
        !self.jira.is_empty() || !self.next_jira.is_empty()
    }
}

/// The whole data file: date key (`YYYY-MM-DD`) -> record.
pub type Document = BTreeMap<String, DayRecord>;
