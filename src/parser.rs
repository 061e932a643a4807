//! Source directory scanner
//!
//! Captures the ordered sequence of SVG sources feeding a build. The listing
//! order is part of the output contract: both format batches and their index
//! files follow it, so the directory is listed exactly once per build and the
//! captured sequence is handed to every batch.

use std::fs;
use std::path::Path;

use crate::error::{GlyphpackError, GlyphpackResult};
use crate::models::IconAsset;

/// List `dir` and read every regular file into an `IconAsset`.
///
/// Entries keep the order the directory listing returns them in; no sorting
/// is applied. Subdirectories are skipped.
pub fn scan_directory(dir: &Path) -> GlyphpackResult<Vec<IconAsset>> {
    if !dir.is_dir() {
        return Err(GlyphpackError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut icons = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let svg = fs::read_to_string(&path)?;
        icons.push(IconAsset::new(file_name, path, svg));
    }

    Ok(icons)
}
