//! Package emitter
//!
//! Orchestrates a build: clears the output root, captures the source listing
//! once, runs every format batch, and writes each format's index files only
//! after all of that format's per-file writes have completed.
//!
//! Format batches run concurrently and independently of each other; within a
//! batch, per-icon artifacts are compiled and written concurrently with no
//! completion-order guarantee. Each job owns a disjoint output path, so the
//! only synchronization point is the join before the index writes.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::adapters::{self, FormatAdapter};
use crate::error::GlyphpackResult;
use crate::fs;
use crate::models::{IconAsset, OutputFormat};
use crate::naming;
use crate::parser;

/// Default width/height applied to every generated component's root element
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Options for a package build
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Formats to emit (empty = all)
    pub formats: Vec<OutputFormat>,
    /// Width/height applied to every component root element
    pub icon_size: u32,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            formats: Vec::new(),
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

impl EmitOptions {
    /// Get effective formats (returns all if the set is empty)
    pub fn effective_formats(&self) -> Vec<OutputFormat> {
        if self.formats.is_empty() {
            OutputFormat::ALL.to_vec()
        } else {
            self.formats.clone()
        }
    }
}

/// Result of a package build
#[derive(Debug, Clone, Serialize)]
pub struct EmitResult {
    /// Number of source icons compiled
    pub icons: usize,
    /// Per-format file counts, in the order the formats were requested
    pub formats: Vec<FormatReport>,
}

/// Files written for one format
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    /// The emitted format
    pub format: OutputFormat,
    /// Number of files written, indexes included
    pub files: usize,
}

impl EmitResult {
    /// Total number of files written across formats
    pub fn files(&self) -> usize {
        self.formats.iter().map(|f| f.files).sum()
    }
}

/// Build the icon package.
///
/// The output directory is cleared up front. The source directory is listed
/// exactly once and that captured order feeds every format's index, keeping
/// the two indexes entry-order consistent with each other. The first failure
/// in a batch aborts it before its index files are written; already-started
/// jobs finish their writes and are left on disk.
pub fn emit_package(
    source_dir: &Path,
    out_dir: &Path,
    options: &EmitOptions,
) -> GlyphpackResult<EmitResult> {
    fs::clean_dir(out_dir)?;
    let icons = parser::scan_directory(source_dir)?;
    let formats = options.effective_formats();

    let reports = formats
        .par_iter()
        .map(|format| {
            let adapter = adapters::get_adapter(*format);
            let files = emit_format(out_dir, &icons, adapter.as_ref(), options.icon_size)?;
            Ok(FormatReport {
                format: *format,
                files,
            })
        })
        .collect::<GlyphpackResult<Vec<_>>>()?;

    Ok(EmitResult {
        icons: icons.len(),
        formats: reports,
    })
}

/// Emit one format's batch: every per-icon artifact, then the two indexes.
fn emit_format(
    out_dir: &Path,
    icons: &[IconAsset],
    adapter: &dyn FormatAdapter,
    size: u32,
) -> GlyphpackResult<usize> {
    let format_dir = out_dir.join(adapter.format().directory_name());
    std::fs::create_dir_all(&format_dir)?;

    // Join barrier: a failure here returns before the index writes below.
    let written = icons
        .par_iter()
        .map(|icon| {
            let outputs = adapter.compile(icon, size)?;
            for output in &outputs {
                fs::atomic_write(&out_dir.join(&output.path), &output.content)?;
            }
            Ok(outputs.len())
        })
        .collect::<GlyphpackResult<Vec<usize>>>()?;

    fs::atomic_write(&format_dir.join("index.js"), &index_content(adapter, icons))?;
    fs::atomic_write(
        &format_dir.join("index.d.ts"),
        &declaration_index_content(icons),
    )?;

    Ok(written.iter().sum::<usize>() + 2)
}

/// Fold the captured icon sequence into one format's barrel index.
fn index_content(adapter: &dyn FormatAdapter, icons: &[IconAsset]) -> String {
    icons
        .iter()
        .map(|icon| adapter.index_line(&naming::component_name(&icon.file_name)))
        .collect()
}

/// The type-only index: ESM re-exports regardless of format.
fn declaration_index_content(icons: &[IconAsset]) -> String {
    icons
        .iter()
        .map(|icon| adapters::declaration_index_line(&naming::component_name(&icon.file_name)))
        .collect()
}
