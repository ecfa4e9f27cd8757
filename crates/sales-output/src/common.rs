//! Shared file helpers for output writers.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Ensure the parent directory of a file path exists.
///
/// Idempotent: an existing directory is not an error.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Temporary sibling used while `path` is being written.
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file via temp file + rename.
///
/// `write` receives the open temp file. On any failure the temp file is
/// removed and the destination is left as it was.
pub(crate) fn write_atomic(
    path: &Path,
    write: impl FnOnce(&mut File, &Path) -> Result<()>,
) -> Result<()> {
    ensure_parent_dir(path)?;
    let temp_path = temp_path_for(path);

    let result = (|| {
        let mut file = File::create(&temp_path).map_err(|e| OutputError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        write(&mut file, &temp_path)?;
        file.flush().map_err(|e| OutputError::Io {
            operation: "flush",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| OutputError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
