use crate::core::validate::required_text;
use crate::errors::{AppError, AppResult};
use crate::models::RefList;
use crate::store::{CarryOutcome, Store};
use chrono::NaiveDate;

/// Issue references of today and of the next working day.
pub struct JiraLogic;

impl JiraLogic {
    pub fn add(store: &Store, link: &str, list: RefList) -> AppResult<String> {
        let link = required_text(link, "Jira link")?;
        store.add_reference(&link, list)?;
        Ok(link)
    }

    /// Delete the reference at 1-based `position` (references are displayed
    /// in insertion order).
    pub fn delete(store: &Store, position: usize, list: RefList) -> AppResult<String> {
        let removed = match position.checked_sub(1) {
            Some(index) => store.delete_reference(index, list)?,
            None => None,
        };
        removed.ok_or_else(|| AppError::position(list.key(), position))
    }

    /// Copy references forward from the latest earlier day with data.
    /// `None` when there is no such day.
    pub fn carry(store: &Store) -> AppResult<Option<(NaiveDate, CarryOutcome)>> {
        store.carry_forward()
    }
}
