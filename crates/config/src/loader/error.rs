//! Error types for env file loading.
//!
//! Invariants:
//! - Every variant carries the path of the file being processed.
//! - Errors NEVER include raw env file line contents to prevent secret leakage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an env file load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file exists but could not be read (permissions, not UTF-8, a directory, ...).
    #[error("Failed to read env file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assignment cannot be stored in the environment.
    ///
    /// SAFETY: only the line number is reported, NOT the line content.
    #[error(
        "Invalid assignment in env file at {path}, line {line}: keys must be non-empty and keys and values must not contain NUL"
    )]
    InvalidAssignment { path: PathBuf, line: usize },
}

impl LoadError {
    /// The file that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Read { path, .. } | LoadError::InvalidAssignment { path, .. } => path,
        }
    }
}
