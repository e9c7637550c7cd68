//! Pure operations over an in-memory document. The `Store` wraps each of
//! them in a load/save cycle.

use crate::models::{DayRecord, Document, RefList};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Keys removed from the document
    pub removed: Vec<String>,
    /// Keys that are not `YYYY-MM-DD` dates; left in place
    pub skipped: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarryOutcome {
    pub jira: usize,
    pub next_jira: usize,
}

impl CarryOutcome {
    pub fn total(&self) -> usize {
        self.jira + self.next_jira
    }
}

/// Remove every record dated strictly before `cutoff`.
pub fn prune_before(doc: &mut Document, cutoff: NaiveDate) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();

    for key in doc.keys() {
        match parse_date(key) {
            Some(d) if d < cutoff => outcome.removed.push(key.clone()),
            Some(_) => {}
            None => outcome.skipped.push(key.clone()),
        }
    }

    for key in &outcome.removed {
        doc.remove(key);
    }

    outcome
}

/// Latest date key strictly before `today`.
pub fn most_recent_prior_date(doc: &Document, today: NaiveDate) -> Option<NaiveDate> {
    doc.keys()
        .filter_map(|k| parse_date(k))
        .filter(|d| *d < today)
        .max()
}

/// Append to `target` the references of `source` it does not hold yet,
/// in source order. A reference is never added twice, even when `source`
/// itself repeats it.
pub fn copy_missing_refs(source: &DayRecord, target: &mut DayRecord) -> CarryOutcome {
    CarryOutcome {
        jira: copy_list(source, target, RefList::Today),
        next_jira: copy_list(source, target, RefList::Next),
    }
}

fn copy_list(source: &DayRecord, target: &mut DayRecord, list: RefList) -> usize {
    let dest = target.refs_mut(list);
    let mut present: HashSet<String> = dest.iter().cloned().collect();
    let mut copied = 0;

    for link in source.refs(list) {
        if present.insert(link.clone()) {
            dest.push(link.clone());
            copied += 1;
        }
    }

    copied
}
