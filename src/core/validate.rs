//! Input checks run by the controllers before any store call.

use crate::errors::{AppError, AppResult};
use crate::utils::date::require_date;
use crate::utils::time::require_time;

/// Trimmed, non-empty text.
pub fn required_text(input: &str, field: &str) -> AppResult<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(AppError::EmptyField(field.to_string()));
    }
    Ok(value.to_string())
}

/// Non-empty `HH:MM` value, returned trimmed.
pub fn time_field(input: &str, field: &str) -> AppResult<String> {
    let value = required_text(input, field)?;
    require_time(&value)?;
    Ok(value)
}

/// Non-empty `YYYY-MM-DD` value, returned trimmed.
pub fn date_field(input: &str, field: &str) -> AppResult<String> {
    let value = required_text(input, field)?;
    require_date(&value)?;
    Ok(value)
}
