//! Append and atomic rewrite for line-oriented text files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::IoError;

fn ensure_parent(path: &Path) -> Result<&Path, IoError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(IoError::access("create parent directory", parent))?;
    Ok(parent)
}

/// Append `bytes` to the end of `path`, creating the file if needed.
///
/// The handle is scoped to this call and dropped on every exit path.
///
/// # Errors
///
/// Returns [`IoError::Access`] if the parent directory cannot be created or the
/// file cannot be opened, written or flushed.
pub fn append_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), IoError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(IoError::access("open for append", path))?;
    file.write_all(bytes)
        .map_err(IoError::access("append to", path))?;
    file.flush().map_err(IoError::access("flush", path))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "appended bytes");
    Ok(())
}

/// Replace the contents of `path` atomically:
/// - ensure parent directory exists
/// - write to a temp file in the same directory
/// - fsync file + rename into place
///
/// A failure before the rename leaves the previous file untouched; the temp
/// file is removed on a best-effort basis.
///
/// # Errors
///
/// Returns [`IoError::Access`] naming the step that failed.
pub fn atomic_write_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<(), IoError> {
    let path = path.as_ref();
    let parent = ensure_parent(path)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("store.txt");
    let temp_path = parent.join(format!(".{file_name}.{}.tmp", uuid::Uuid::new_v4()));

    let written = (|| -> Result<(), IoError> {
        let mut temp_file =
            fs::File::create(&temp_path).map_err(IoError::access("create temp file", &temp_path))?;
        temp_file
            .write_all(content)
            .map_err(IoError::access("write temp file", &temp_path))?;
        temp_file
            .sync_all()
            .map_err(IoError::access("fsync temp file", &temp_path))?;
        fs::rename(&temp_path, path).map_err(IoError::access("rename temp file onto", path))
    })();

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "rewrote file atomically");
    Ok(())
}
