//! Filesystem writes for rendered documents, index files and catalogs.

use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a rendered spec, README, completion summary or saved catalog.
///
/// Missing group directories are created first. The bytes go to a tempfile
/// beside the target and are renamed over it, so an interrupted `generate`
/// leaves either the previous document or the new one.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create the output base directory before a run. Existing directories are
/// fine; a regular file in the way is an `Io` error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Used by `specgen init`: writes the starter catalog unless the user already
/// has a file there. Returns true when the file was created.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}
