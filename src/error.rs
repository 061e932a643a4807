//! Error types for glyphpack
//!
//! Uses `thiserror` for library errors; the binary boundary wraps them in
//! `anyhow` for reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for glyphpack operations
pub type GlyphpackResult<T> = Result<T, GlyphpackError>;

/// Main error type for glyphpack operations
#[derive(Error, Debug)]
pub enum GlyphpackError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory missing or not a directory
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Optimize/transpile/minify pipeline failure for one icon
    #[error("transform failed for {}: {message}", .file.display())]
    Transform { file: PathBuf, message: String },
}

impl GlyphpackError {
    /// Build a transform error naming the offending source file
    pub fn transform(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Transform {
            file: file.into(),
            message: message.into(),
        }
    }
}
