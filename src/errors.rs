//! Unified application error type.
//! All modules (store, core, cli, ui, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Data file error: {0}")]
    Data(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("The field '{0}' cannot be empty")]
    EmptyField(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No {list} entry at position {position}")]
    InvalidPosition { list: String, position: usize },

    #[error("No record found for today ({0})")]
    NoRecordForToday(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn position(list: &str, position: usize) -> Self {
        AppError::InvalidPosition {
            list: list.to_string(),
            position,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
