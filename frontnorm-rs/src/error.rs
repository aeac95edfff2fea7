//! Error types and exit codes for frontnorm.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const ROOT_NOT_FOUND: i32 = 2;
    pub const FILE_ERRORS: i32 = 3;
    pub const NEEDS_NORMALIZATION: i32 = 10;
}

/// Main error type for frontnorm operations.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config error in {path}: {message}")]
    ConfigError { path: PathBuf, message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl NormalizeError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NormalizeError::RootNotFound(_) => ExitCode::RootNotFound,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Result type alias for frontnorm operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    RootNotFound,
    FileErrors,
    NeedsNormalization,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::RootNotFound => exit_code::ROOT_NOT_FOUND,
            ExitCode::FileErrors => exit_code::FILE_ERRORS,
            ExitCode::NeedsNormalization => exit_code::NEEDS_NORMALIZATION,
        }
    }
}
