//! CJS adapter
//!
//! Generates CommonJS artifacts under `cjs/`:
//! - `cjs/<Name>.js` - component assigned to `module.exports`, requiring
//!   React instead of importing it
//! - `cjs/<Name>.d.ts` - type declaration (same text as the ESM copy)
//!
//! Its index assigns every component onto the module object.

use std::path::PathBuf;

use crate::adapters::{declaration_file, FormatAdapter};
use crate::error::GlyphpackResult;
use crate::models::{IconAsset, OutputFile, OutputFormat};
use crate::naming;
use crate::transform;

/// CJS adapter
pub struct CjsAdapter;

impl CjsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CjsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for CjsAdapter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Cjs
    }

    fn compile(&self, icon: &IconAsset, size: u32) -> GlyphpackResult<Vec<OutputFile>> {
        let component = naming::component_name(&icon.file_name);
        let module = transform::component_module(icon, &component, size, OutputFormat::Cjs)?;

        let dir = PathBuf::from(OutputFormat::Cjs.directory_name());
        Ok(vec![
            OutputFile::new(dir.join(format!("{component}.js")), module),
            OutputFile::new(
                dir.join(format!("{component}.d.ts")),
                declaration_file(&component),
            ),
        ])
    }

    fn index_line(&self, component: &str) -> String {
        format!("module.exports.{component} = require('./{component}.js')\n")
    }
}
