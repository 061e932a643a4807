//! Common test utilities for glyphpack integration tests.
//!
//! Provides `TestEnv`, an isolated build environment with temp source and
//! output directories, plus helpers to run the glyphpack CLI and to snapshot
//! an output tree for comparison.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A minimal, well-formed icon source
pub const ARROW_UP_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"><path d="M5 15l7-7 7 7"/></svg>"#;

/// A second well-formed icon source
pub const CIRCLE_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="9"/></svg>"#;

/// Not XML at all; the transform pipeline must reject it
pub const BROKEN_SVG: &str = "this is not an svg";

/// Result of running a glyphpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated build environment with temp source and output directories.
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("icons")).expect("create source dir");
        Self { root }
    }

    /// Add an icon source file
    pub fn with_icon(self, name: &str, content: &str) -> Self {
        std::fs::write(self.source_dir().join(name), content).expect("write icon");
        self
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.path().join("icons")
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("dist")
    }

    pub fn out_path(&self, relative: &str) -> PathBuf {
        self.out_dir().join(relative)
    }

    pub fn read_out(&self, relative: &str) -> String {
        std::fs::read_to_string(self.out_path(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    /// The source filenames in the order the directory listing returns them.
    ///
    /// This is the order the build captured, so index expectations are
    /// constructed from it rather than from creation order.
    pub fn listing_order(&self) -> Vec<String> {
        std::fs::read_dir(self.source_dir())
            .expect("list source dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect()
    }

    /// Run glyphpack with the given arguments from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_glyphpack"))
            .current_dir(self.root.path())
            .args(args)
            .output()
            .expect("failed to execute glyphpack");
        output_to_result(output)
    }

    /// Run a default build: icons/ -> dist/, both formats
    pub fn build(&self) -> TestResult {
        self.run(&["build", "--source", "icons", "--out", "dist"])
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot a directory tree as relative-path -> content
pub fn snapshot_dir(root: &Path) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    collect_files(root, root, &mut entries);
    entries
}

fn collect_files(root: &Path, dir: &Path, entries: &mut BTreeMap<String, String>) {
    for entry in std::fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect_files(root, &path, entries);
        } else {
            let relative = path
                .strip_prefix(root)
                .expect("path under root")
                .to_string_lossy()
                .into_owned();
            let content = std::fs::read_to_string(&path).expect("read file");
            entries.insert(relative, content);
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
