//! glyphpack CLI - icon package compiler
//!
//! Usage: glyphpack <COMMAND>
//!
//! Commands:
//!   build  Compile SVG sources into the dual-format component package
//!   names  Show the filename to component identifier mapping

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use glyphpack::emit::{self, EmitOptions};
use glyphpack::models::OutputFormat;
use glyphpack::{naming, parser};

/// glyphpack - icon package compiler
#[derive(Parser, Debug)]
#[command(name = "glyphpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile SVG sources into the dual-format component package
    Build {
        /// Directory of SVG icon sources
        #[arg(short, long, default_value = "icons")]
        source: PathBuf,

        /// Output directory (cleared before the build)
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Width and height applied to every component's root element
        #[arg(long, default_value_t = emit::DEFAULT_ICON_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,

        /// Formats to emit (defaults to all)
        #[arg(long, value_delimiter = ',')]
        formats: Vec<OutputFormat>,
    },

    /// Show the filename to component identifier mapping (debugging)
    Names {
        /// Directory of SVG icon sources
        #[arg(short, long, default_value = "icons")]
        source: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            source,
            out,
            size,
            formats,
        } => cmd_build(&source, &out, size, formats, cli.json),
        Commands::Names { source } => cmd_names(&source, cli.json),
    }
}

fn cmd_build(
    source: &Path,
    out: &Path,
    size: u32,
    formats: Vec<OutputFormat>,
    json: bool,
) -> Result<()> {
    if !json {
        println!("🏗  Building icon package...");
        println!("Source: {}", source.display());
        println!("Output: {}", out.display());
        println!("Size: {size}");
    }

    let options = EmitOptions {
        formats,
        icon_size: size,
    };
    let result = emit::emit_package(source, out, &options).context("icon package build failed")?;

    if json {
        let output = serde_json::json!({
            "event": "build",
            "status": "success",
            "icons": result.icons,
            "files": result.files(),
            "formats": result.formats,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for report in &result.formats {
            println!("✓ {}: {} files", report.format.display_name(), report.files);
        }
        println!("✅ Finished building package ({} icons).", result.icons);
    }

    Ok(())
}

fn cmd_names(source: &Path, json: bool) -> Result<()> {
    let icons = parser::scan_directory(source)?;

    if json {
        let entries: Vec<_> = icons
            .iter()
            .map(|icon| {
                serde_json::json!({
                    "file": icon.file_name,
                    "component": naming::component_name(&icon.file_name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string(&entries)?);
    } else {
        for icon in &icons {
            println!(
                "{} -> {}",
                icon.file_name,
                naming::component_name(&icon.file_name)
            );
        }
    }

    Ok(())
}
