//! Path utilities: expand ~, validate absolute paths, derive sibling files.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

/// Operation log living next to a data file: `data.json` -> `data.log`
pub fn oplog_path_for(data_file: &Path) -> PathBuf {
    data_file.with_extension("log")
}
