//! Whole-run processing and its summary.

use crate::document::{process_file, FileReport, Outcome, WriteMode};
use crate::error::Result;
use crate::workspace::Workspace;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub normalized: usize,
    pub already_normalized: usize,
    pub no_frontmatter: usize,
    pub errors: usize,
}

/// Everything a run did, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileError>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(mode: WriteMode) -> Self {
        Self {
            dry_run: mode == WriteMode::DryRun,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: FileReport) {
        self.files.push(report);
        self.summary = compute_summary(&self.files, self.errors.len());
    }

    pub fn record_error(&mut self, path: &Path, message: impl Into<String>) {
        self.errors.push(FileError {
            path: path.to_path_buf(),
            message: message.into(),
        });
        self.summary = compute_summary(&self.files, self.errors.len());
    }

    /// Files whose content changed (or would change in a dry run).
    pub fn changed_files(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Normalized)
            .map(|f| f.path.as_path())
    }

    pub fn has_changes(&self) -> bool {
        self.summary.normalized > 0
    }

    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }
}

/// Count outcomes.
pub fn compute_summary(files: &[FileReport], errors: usize) -> RunSummary {
    let mut summary = RunSummary {
        total: files.len() + errors,
        errors,
        ..RunSummary::default()
    };

    for file in files {
        match file.outcome {
            Outcome::Normalized => summary.normalized += 1,
            Outcome::AlreadyNormalized => summary.already_normalized += 1,
            Outcome::NoFrontmatter => summary.no_frontmatter += 1,
        }
    }

    summary
}

/// Normalize every discovered file. Per-file failures are recorded and do
/// not stop the run; only discovery errors are returned.
pub fn normalize_workspace(workspace: &Workspace, mode: WriteMode) -> Result<RunReport> {
    let files = workspace.list_files()?;
    Ok(normalize_files(&workspace.root, &files, mode))
}

/// Normalize the given files relative to `root`.
pub fn normalize_files(root: &Path, files: &[PathBuf], mode: WriteMode) -> RunReport {
    let mut report = RunReport::new(mode);

    for path in files {
        match process_file(root, path, mode) {
            Ok(file_report) => report.record(file_report),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "failed");
                report.record_error(path, format!("Error processing file: {}", e));
            }
        }
    }

    report
}
