use crate::core::validate::date_field;
use crate::errors::AppResult;
use crate::store::Store;

/// The planned date of the next working session.
pub struct NextDateLogic;

impl NextDateLogic {
    /// Only the `YYYY-MM-DD` shape is checked: past dates and weekends are
    /// accepted as typed.
    pub fn set(store: &Store, date: &str) -> AppResult<String> {
        let date = date_field(date, "next date")?;
        store.set_next_date(&date)?;
        Ok(date)
    }

    pub fn get(store: &Store) -> AppResult<String> {
        store.get_next_date()
    }
}
