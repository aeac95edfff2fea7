//! Agent file representation and per-file normalization.

use crate::error::{NormalizeError, Result};
use crate::normalizer::{normalize_document, Normalization};
use crate::parser::DELIMITER;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// An agent definition file on disk.
#[derive(Debug, Clone)]
pub struct AgentFile {
    /// Path as listed (relative to the root for discovered files).
    pub path: PathBuf,

    /// Raw content of the file.
    pub content: String,
}

/// What normalization did, or would do, to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Normalized,
    AlreadyNormalized,
    NoFrontmatter,
}

impl Outcome {
    /// Message shown next to the file name.
    pub fn message(self, dry_run: bool) -> &'static str {
        match (self, dry_run) {
            (Outcome::Normalized, false) => "Normalized YAML frontmatter",
            (Outcome::Normalized, true) => "Would normalize YAML frontmatter",
            (Outcome::AlreadyNormalized, _) => "Already normalized",
            (Outcome::NoFrontmatter, _) => "No YAML frontmatter found",
        }
    }
}

/// Whether changed content is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped_fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped_tools: Vec<String>,
}

impl AgentFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a file from disk.
    pub fn load(root: &Path, relative_path: &Path) -> Result<Self> {
        let full_path = root.join(relative_path);
        let content =
            std::fs::read_to_string(&full_path).map_err(|source| NormalizeError::Read {
                path: relative_path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: relative_path.to_path_buf(),
            content,
        })
    }

    /// Save the file to disk.
    pub fn save(&self, root: &Path) -> Result<()> {
        let full_path = root.join(&self.path);
        std::fs::write(&full_path, &self.content).map_err(|source| NormalizeError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Files must open with the delimiter to be considered.
    pub fn has_frontmatter(&self) -> bool {
        self.content.starts_with(DELIMITER)
    }

    /// Normalize the content without touching disk.
    ///
    /// Returns `None` for files that do not start with frontmatter.
    pub fn normalized(&self) -> Option<Normalization> {
        if !self.has_frontmatter() {
            return None;
        }
        Some(normalize_document(&self.content))
    }

    /// Normalize in memory and report the outcome, returning the new content
    /// when it differs.
    pub fn normalize(&self) -> (FileReport, Option<String>) {
        let mut report = FileReport {
            path: self.path.clone(),
            outcome: Outcome::NoFrontmatter,
            dropped_fields: Vec::new(),
            dropped_tools: Vec::new(),
        };

        let Some(normalization) = self.normalized() else {
            return (report, None);
        };

        if let Some(parsed) = &normalization.frontmatter {
            report.dropped_fields = parsed.dropped_fields.clone();
            report.dropped_tools = parsed.dropped_tools().to_vec();
        }

        if normalization.content == self.content {
            report.outcome = Outcome::AlreadyNormalized;
            (report, None)
        } else {
            report.outcome = Outcome::Normalized;
            (report, Some(normalization.content))
        }
    }
}

/// Load, normalize and, in [`WriteMode::Write`], save one file.
pub fn process_file(root: &Path, relative_path: &Path, mode: WriteMode) -> Result<FileReport> {
    let file = AgentFile::load(root, relative_path)?;
    let (report, new_content) = file.normalize();

    if !report.dropped_fields.is_empty() {
        tracing::debug!(path = %relative_path.display(), fields = ?report.dropped_fields, "dropping fields");
    }
    if !report.dropped_tools.is_empty() {
        tracing::debug!(path = %relative_path.display(), tools = ?report.dropped_tools, "dropping tools");
    }

    if let (Some(content), WriteMode::Write) = (new_content, mode) {
        AgentFile::new(relative_path, content).save(root)?;
    }

    tracing::debug!(path = %relative_path.display(), outcome = ?report.outcome, "processed");
    Ok(report)
}
