use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally zipped.
    /// Returns the final path, or `None` when the user declined an overwrite.
    pub fn backup(store: &Store, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup path must be absolute: {dest_file}"
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));
            print!("Do you want to overwrite it? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;

            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                info("Backup cancelled by user.");
                return Ok(None);
            }
        }

        // 4️⃣ Copy data file
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Internal log
        store.log_event(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "data.json".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
