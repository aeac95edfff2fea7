//! Discovery of agent files under a root directory.

use crate::config::Config;
use crate::error::{NormalizeError, Result};
use glob::glob;
use std::path::{Component, Path, PathBuf};

/// A directory tree holding agent definition files.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root path the glob pattern is resolved against.
    pub root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Create a workspace from a resolved config.
    pub fn new(config: Config) -> Result<Self> {
        let root = config.resolve_root()?;
        Ok(Self { root, config })
    }

    /// Get the full path for a path relative to the root.
    pub fn file_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    pub fn pattern(&self) -> &str {
        &self.config.pattern
    }

    /// List files matching the pattern, relative to the root and sorted.
    ///
    /// Directories, excluded file names and paths with a hidden component
    /// are skipped.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let full_pattern = self.root.join(self.pattern());
        let pattern_str = full_pattern.to_string_lossy();

        let mut files = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    let relative = path.strip_prefix(&self.root).unwrap_or(&path);
                    if is_hidden(relative) || self.config.is_excluded(relative) {
                        tracing::trace!(path = %relative.display(), "skipping");
                        continue;
                    }
                    files.push(relative.to_path_buf());
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }

        files.sort();
        tracing::info!(count = files.len(), pattern = %self.pattern(), "discovered files");
        Ok(files)
    }

    /// Resolve a user-supplied file path: absolute, relative to the working
    /// directory, or relative to the root.
    pub fn resolve_file(&self, path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        let under_root = self.file_path(path);
        if under_root.is_file() {
            return Ok(under_root);
        }
        Err(NormalizeError::FileNotFound(path.to_path_buf()))
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
