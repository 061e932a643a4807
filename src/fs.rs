//! File system helpers
//!
//! Writes are atomic: content goes to a temp file in the destination
//! directory which is then persisted over the final path. Concurrent writers
//! touching disjoint paths need no coordination.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::GlyphpackResult;

/// Write content to a file atomically
///
/// Uses the tempfile + rename pattern; parent directories are created as
/// needed.
pub fn atomic_write(path: &Path, content: &str) -> GlyphpackResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Recursively clear a directory, leaving it empty.
///
/// Destructive and irreversible; a missing directory is not an error.
pub fn clean_dir(path: &Path) -> GlyphpackResult<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(path)?;
    Ok(())
}
