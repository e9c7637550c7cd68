//! JSON document store.
//!
//! The whole data file is one JSON object keyed by `YYYY-MM-DD`. Every
//! operation loads the full document, mutates the record of "today" and
//! writes the full document back. There is no locking: a concurrent external
//! writer simply loses to whoever saves last.

pub mod document;
pub mod oplog;

use crate::config::Config;
use crate::core::calculator::workdays::next_working_day;
use crate::errors::AppResult;
use crate::models::{DayRecord, Document, LogEntry, RefList};
use crate::utils::date::{self, to_key};
use crate::utils::path::oplog_path_for;
use chrono::{NaiveDate, TimeDelta};
use std::fs;
use std::path::{Path, PathBuf};

pub use document::{CarryOutcome, PruneOutcome};

pub struct Store {
    path: PathBuf,
    oplog: PathBuf,
    pinned_today: Option<NaiveDate>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let oplog = oplog_path_for(&path);
        Self {
            path,
            oplog,
            pinned_today: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.data_path())
    }

    /// Freeze "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn oplog_path(&self) -> &Path {
        &self.oplog
    }

    /// Current date, re-read on every call unless pinned.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(date::today)
    }

    pub fn today_key(&self) -> String {
        to_key(self.today())
    }

    // ---------------------------
    // Whole-document I/O
    // ---------------------------

    /// Create the data directory and an empty document when missing.
    /// Returns `true` when the file was created.
    pub fn ensure_initialized(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        self.save(&Document::new())?;
        self.log_event("init", &self.path.to_string_lossy(), "Data file created");
        Ok(true)
    }

    pub fn load(&self) -> AppResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrite the whole file: 2-space indentation, non-ASCII kept as-is.
    pub fn save(&self, doc: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    // ---------------------------
    // Mutations on today's record
    // ---------------------------

    pub fn append_log(&self, start: &str, end: &str, desc: &str) -> AppResult<()> {
        self.with_today_record(|rec| rec.logs.push(LogEntry::new(start, end, desc)))?;
        self.log_event(
            "add",
            &self.today_key(),
            &format!("{start} → {end} {desc}"),
        );
        Ok(())
    }

    /// Change start/end of the entry at storage `index`.
    /// Returns `false` when today has no record or the index is out of range.
    pub fn update_log(&self, index: usize, start: &str, end: &str) -> AppResult<bool> {
        let updated = self.with_existing_today_record(|rec| {
            let entry = rec.logs.get_mut(index)?;
            entry.start = start.to_string();
            entry.end = end.to_string();
            Some(())
        })?;

        if updated.is_some() {
            self.log_event(
                "edit",
                &self.today_key(),
                &format!("#{index} time → {start} → {end}"),
            );
        }
        Ok(updated.is_some())
    }

    /// Replace start, end and description of the entry at storage `index`.
    /// Same bounds contract as [`Store::update_log`].
    pub fn update_log_entry(
        &self,
        index: usize,
        start: &str,
        end: &str,
        desc: &str,
    ) -> AppResult<bool> {
        let updated = self.with_existing_today_record(|rec| {
            let entry = rec.logs.get_mut(index)?;
            *entry = LogEntry::new(start, end, desc);
            Some(())
        })?;

        if updated.is_some() {
            self.log_event(
                "edit",
                &self.today_key(),
                &format!("#{index} → {start} → {end} {desc}"),
            );
        }
        Ok(updated.is_some())
    }

    /// Remove and return the entry at storage `index`.
    pub fn delete_log(&self, index: usize) -> AppResult<Option<LogEntry>> {
        let removed = self.with_existing_today_record(|rec| {
            (index < rec.logs.len()).then(|| rec.logs.remove(index))
        })?;

        if let Some(entry) = &removed {
            self.log_event(
                "del",
                &self.today_key(),
                &format!("{} → {} {}", entry.start, entry.end, entry.desc),
            );
        }
        Ok(removed)
    }

    pub fn add_reference(&self, link: &str, list: RefList) -> AppResult<()> {
        self.with_today_record(|rec| rec.refs_mut(list).push(link.to_string()))?;
        self.log_event(&format!("add_{}", list.key()), &self.today_key(), link);
        Ok(())
    }

    /// Remove and return the reference at `index` of the chosen list.
    pub fn delete_reference(&self, index: usize, list: RefList) -> AppResult<Option<String>> {
        let removed = self.with_existing_today_record(|rec| {
            let refs = rec.refs_mut(list);
            (index < refs.len()).then(|| refs.remove(index))
        })?;

        if let Some(link) = &removed {
            self.log_event(&format!("del_{}", list.key()), &self.today_key(), link);
        }
        Ok(removed)
    }

    /// Overwrite today's planned date. The value is stored as given.
    pub fn set_next_date(&self, date_str: &str) -> AppResult<()> {
        self.with_today_record(|rec| rec.next_date = date_str.to_string())?;
        self.log_event("next_date", &self.today_key(), date_str);
        Ok(())
    }

    // ---------------------------
    // Reads of today's record
    // ---------------------------

    pub fn get_today_record(&self) -> AppResult<Option<DayRecord>> {
        let mut doc = self.load()?;
        Ok(doc.remove(&self.today_key()))
    }

    pub fn get_logs(&self) -> AppResult<Vec<LogEntry>> {
        Ok(self.get_today_record()?.map(|r| r.logs).unwrap_or_default())
    }

    pub fn get_references(&self, list: RefList) -> AppResult<Vec<String>> {
        Ok(self
            .get_today_record()?
            .map(|r| r.refs(list).clone())
            .unwrap_or_default())
    }

    pub fn get_next_date(&self) -> AppResult<String> {
        let stored = self.get_today_record()?.map(|r| r.next_date);
        Ok(match stored {
            Some(d) if !d.is_empty() => d,
            _ => to_key(next_working_day(self.today())),
        })
    }

    // ---------------------------
    // Whole-document sweeps
    // ---------------------------

    /// Drop every record dated strictly before today minus `retention_days`.
    pub fn prune(&self, retention_days: u32) -> AppResult<PruneOutcome> {
        let cutoff = TimeDelta::try_days(i64::from(retention_days))
            .and_then(|delta| self.today().checked_sub_signed(delta))
            .unwrap_or(NaiveDate::MIN);

        let mut doc = self.load()?;
        let outcome = document::prune_before(&mut doc, cutoff);

        if !outcome.removed.is_empty() {
            self.save(&doc)?;
            self.log_event(
                "prune",
                &to_key(cutoff),
                &format!("Removed {}", outcome.removed.join(", ")),
            );
        }
        Ok(outcome)
    }

    pub fn find_most_recent_prior_date(&self) -> AppResult<Option<NaiveDate>> {
        let doc = self.load()?;
        Ok(document::most_recent_prior_date(&doc, self.today()))
    }

    /// Copy into today the references of `source` that today lacks.
    pub fn copy_forward_references(&self, source: NaiveDate) -> AppResult<CarryOutcome> {
        let mut doc = self.load()?;
        let src = doc.get(&to_key(source)).cloned().unwrap_or_default();

        let today = self.today();
        let rec = doc
            .entry(to_key(today))
            .or_insert_with(|| DayRecord::for_date(today));
        let outcome = document::copy_missing_refs(&src, rec);

        self.save(&doc)?;
        self.log_event(
            "carry",
            &self.today_key(),
            &format!(
                "From {}: jira +{}, next_jira +{}",
                to_key(source),
                outcome.jira,
                outcome.next_jira
            ),
        );
        Ok(outcome)
    }

    /// Copy references forward from the most recent earlier day with data.
    pub fn carry_forward(&self) -> AppResult<Option<(NaiveDate, CarryOutcome)>> {
        match self.find_most_recent_prior_date()? {
            Some(prev) => Ok(Some((prev, self.copy_forward_references(prev)?))),
            None => Ok(None),
        }
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    /// Load, create today's record if needed, apply `f`, save.
    fn with_today_record<T>(&self, f: impl FnOnce(&mut DayRecord) -> T) -> AppResult<T> {
        let mut doc = self.load()?;
        let today = self.today();
        let rec = doc
            .entry(to_key(today))
            .or_insert_with(|| DayRecord::for_date(today));
        let out = f(rec);
        self.save(&doc)?;
        Ok(out)
    }

    /// Load and apply `f` to today's record if it exists.
    /// The document is saved only when `f` returns `Some`.
    fn with_existing_today_record<T>(
        &self,
        f: impl FnOnce(&mut DayRecord) -> Option<T>,
    ) -> AppResult<Option<T>> {
        let mut doc = self.load()?;
        let out = match doc.get_mut(&self.today_key()) {
            Some(rec) => f(rec),
            None => None,
        };

        if out.is_some() {
            self.save(&doc)?;
        }
        Ok(out)
    }

    /// Internal log line; failures never block the operation.
    pub fn log_event(&self, operation: &str, target: &str, message: &str) {
        let _ = oplog::ttlog(&self.oplog, operation, target, message);
    }
}
