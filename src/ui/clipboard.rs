use crate::errors::{AppError, AppResult};
use arboard::Clipboard;

/// Put `text` on the system clipboard.
///
/// On X11 the selection is owned by this process: contents copied from a
/// one-shot command disappear when it exits unless a clipboard manager
/// picks them up.
pub fn copy_text(text: &str) -> AppResult<()> {
    let mut cb = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    cb.set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}
