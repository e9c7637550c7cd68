// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_from_document;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored log entry.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(store: &Store, format: ExportFormat, file: &str, force: bool) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let rows = rows_from_document(&store.load()?);
        if rows.is_empty() {
            warning("No log entries found.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        store.log_event("export", &path.to_string_lossy(), format.as_str());
        Ok(rows.len())
    }
}
