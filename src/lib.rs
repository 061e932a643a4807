//! glyphpack - icon package compiler
//!
//! Converts a directory of SVG icon sources into a dual-format (ESM and CJS)
//! JavaScript component package with TypeScript declaration files and a
//! barrel index per format.

pub mod adapters;
pub mod emit;
pub mod error;
pub mod fs;
pub mod models;
pub mod naming;
pub mod parser;
pub mod transform;

// Re-exports for convenience
pub use adapters::{all_adapters, get_adapter, FormatAdapter};
pub use emit::{emit_package, EmitOptions, EmitResult, DEFAULT_ICON_SIZE};
pub use error::{GlyphpackError, GlyphpackResult};
pub use models::{IconAsset, OutputFile, OutputFormat};
pub use naming::component_name;
pub use parser::scan_directory;
