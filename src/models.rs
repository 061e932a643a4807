//! Core data models for glyphpack
//!
//! Defines the fundamental data structures used throughout glyphpack:
//! - `IconAsset`: one SVG source file captured from the input directory
//! - `OutputFormat`: module-linkage convention for generated packages
//! - `OutputFile`: a generated artifact ready to be written

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Module convention for a generated component package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// ES modules: one default export per component, named re-exports in the index
    Esm,
    /// CommonJS: module-object assignment exports, require-style imports
    Cjs,
}

impl OutputFormat {
    /// Every format a build emits by default
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Esm, OutputFormat::Cjs];

    /// Output subdirectory for this format
    pub fn directory_name(&self) -> &'static str {
        match self {
            OutputFormat::Esm => "esm",
            OutputFormat::Cjs => "cjs",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::Esm => "ESM",
            OutputFormat::Cjs => "CJS",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One SVG icon source file
///
/// Assets keep the position the directory listing gave them; that order is
/// part of the index contract.
#[derive(Debug, Clone, PartialEq)]
pub struct IconAsset {
    /// Raw filename within the source directory (e.g. `arrow-up.svg`)
    pub file_name: String,

    /// Full path to the source file
    pub source_path: PathBuf,

    /// Raw SVG content
    pub svg: String,
}

impl IconAsset {
    /// Create a new IconAsset
    pub fn new(
        file_name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        svg: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            source_path: source_path.into(),
            svg: svg.into(),
        }
    }
}

/// A generated artifact ready to be written
///
/// The path is relative to the output root. Artifacts are write-once: they
/// are generated, flushed to disk, and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Path where this file should be written (relative to the output root)
    pub path: PathBuf,

    /// Generated content
    pub content: String,
}

impl OutputFile {
    /// Create a new OutputFile
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
