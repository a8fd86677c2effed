//! On-disk layout for generated workflow modules.
//!
//! A collection becomes one `.ts` module per workflow plus an `index.ts`
//! entry module re-exporting all of them, which is the shape the Temporal
//! worker bundler expects to find.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use tempoweave_codegen::naming::{ensure_unique_file_name, sanitize_file_name, strip_extension};

use crate::types::WorkflowArtifact;

/// File name of the bundle entry module.
pub const ENTRY_POINT: &str = "index.ts";

/// A single module file in a bundle layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub content: String,
}

/// The file set for a committed workflow collection.
///
/// A lone workflow always lands in `workflow.ts`; with more than one, each
/// module takes its sanitized workflow name, uniquified against the others.
/// Module contents end with the trailing newline the sources omit.
#[derive(Debug, Clone)]
pub struct BundleLayout {
    files: Vec<SourceFile>,
}

impl BundleLayout {
    pub fn new(workflows: &[WorkflowArtifact]) -> Self {
        let mut used = HashSet::new();
        let mut files = Vec::with_capacity(workflows.len() + 1);
        let mut specifiers = Vec::with_capacity(workflows.len());

        for artifact in workflows {
            let file_name = if workflows.len() == 1 {
                "workflow.ts".to_owned()
            } else {
                ensure_unique_file_name(&sanitize_file_name(&artifact.workflow_name), &mut used)
            };

            specifiers.push(format!("./{}", strip_extension(&file_name)));
            files.push(SourceFile {
                content: format!("{}\n", artifact.workflow_source),
                file_name,
            });
        }

        let entry = specifiers
            .iter()
            .map(|specifier| format!("export * from '{specifier}'\n"))
            .collect();
        files.push(SourceFile {
            file_name: ENTRY_POINT.to_owned(),
            content: entry,
        });

        Self { files }
    }

    /// Every file in the layout, entry module last.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn entry_point(&self) -> &str {
        ENTRY_POINT
    }

    /// Write every file under `dir`, creating the directory as needed.
    /// Returns the written paths in layout order.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = dir.join(&file.file_name);
            fs::write(&path, &file.content)?;
            written.push(path);
        }
        Ok(written)
    }
}
