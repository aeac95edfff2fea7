//! Run configuration loaded from `frontnorm.toml`.

use crate::error::{NormalizeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "frontnorm.toml";

/// Default glob for agent definitions, relative to the root.
pub const DEFAULT_PATTERN: &str = "codeflow-agents/**/*.md";

/// File discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the pattern is resolved against.
    pub root: Option<PathBuf>,
    /// Glob selecting the files to normalize.
    pub pattern: String,
    /// File names never touched.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            pattern: DEFAULT_PATTERN.to_string(),
            exclude: vec!["README.md".to_string()],
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `./frontnorm.toml` and then
    /// `<config dir>/frontnorm/config.toml` are tried, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(NormalizeError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("frontnorm").join("config.toml"));
        }
        paths
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| NormalizeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|e| NormalizeError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, root: Option<&Path>, pattern: Option<&str>) -> Self {
        if let Some(root) = root {
            self.root = Some(root.to_path_buf());
        }
        if let Some(pattern) = pattern {
            self.pattern = pattern.to_string();
        }
        self
    }

    /// Resolve the root directory, defaulting to the working directory.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            return Err(NormalizeError::RootNotFound(root));
        }
        Ok(root)
    }

    /// Whether a file name is excluded from normalization.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude.iter().any(|excluded| excluded == name))
    }
}
