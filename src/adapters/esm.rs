//! ESM adapter
//!
//! Generates ES-module artifacts under `esm/`:
//! - `esm/<Name>.js` - component with a single default export
//! - `esm/<Name>.d.ts` - type declaration
//!
//! Its index re-exports every component by name.

use std::path::PathBuf;

use crate::adapters::{declaration_file, FormatAdapter};
use crate::error::GlyphpackResult;
use crate::models::{IconAsset, OutputFile, OutputFormat};
use crate::naming;
use crate::transform;

/// ESM adapter
pub struct EsmAdapter;

impl EsmAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsmAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for EsmAdapter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Esm
    }

    fn compile(&self, icon: &IconAsset, size: u32) -> GlyphpackResult<Vec<OutputFile>> {
        let component = naming::component_name(&icon.file_name);
        let module = transform::component_module(icon, &component, size, OutputFormat::Esm)?;

        let dir = PathBuf::from(OutputFormat::Esm.directory_name());
        Ok(vec![
            OutputFile::new(dir.join(format!("{component}.js")), module),
            OutputFile::new(
                dir.join(format!("{component}.d.ts")),
                declaration_file(&component),
            ),
        ])
    }

    fn index_line(&self, component: &str) -> String {
        format!("export {{ default as {component} }} from './{component}.js'\n")
    }
}
