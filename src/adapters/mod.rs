//! Output format adapters
//!
//! Each adapter renders one module-linkage convention. Both compile the same
//! component body; they differ in module syntax, output subdirectory and
//! index re-export shape. Declaration artifacts always use the ESM
//! convention, whichever adapter produced them.

pub mod cjs;
pub mod esm;

pub use cjs::CjsAdapter;
pub use esm::EsmAdapter;

use crate::error::GlyphpackResult;
use crate::models::{IconAsset, OutputFile, OutputFormat};

/// Adapter for one output format
pub trait FormatAdapter: Send + Sync {
    /// The format this adapter renders
    fn format(&self) -> OutputFormat;

    /// Compile one icon into its component and declaration artifacts.
    ///
    /// Paths are relative to the output root and derived solely from the
    /// component identifier and the format.
    fn compile(&self, icon: &IconAsset, size: u32) -> GlyphpackResult<Vec<OutputFile>>;

    /// One re-export line of this format's `index.js`
    fn index_line(&self, component: &str) -> String;
}

/// Type declaration artifact content; identical for every format.
pub fn declaration_file(component: &str) -> String {
    format!(
        "import * as React from 'react'\ndeclare function {component}(props: React.SVGProps<SVGSVGElement>): JSX.Element\nexport default {component}\n"
    )
}

/// One line of `index.d.ts`: always the ESM re-export convention, without a
/// file extension on the module specifier.
pub fn declaration_index_line(component: &str) -> String {
    format!("export {{ default as {component} }} from './{component}'\n")
}

/// Get all available adapters
pub fn all_adapters() -> Vec<Box<dyn FormatAdapter>> {
    vec![Box::new(EsmAdapter::new()), Box::new(CjsAdapter::new())]
}

/// Get the adapter for a specific format
pub fn get_adapter(format: OutputFormat) -> Box<dyn FormatAdapter> {
    match format {
        OutputFormat::Esm => Box::new(EsmAdapter::new()),
        OutputFormat::Cjs => Box::new(CjsAdapter::new()),
    }
}
