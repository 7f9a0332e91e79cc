//! Error types for variable resolution.
//!
//! Invariants:
//! - Every variant names the variable it concerns.
//! - Raw variable values are never included in messages.

use thiserror::Error;

/// Errors surfaced by `try_get*` and turned into panics by `must_get*`.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Environment variable {key} is not set")]
    NotSet { key: String },

    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("Failed to parse {key} as {kind}: {source}")]
    Parse {
        key: String,
        kind: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EnvError {
    /// The variable the error concerns.
    pub fn key(&self) -> &str {
        match self {
            EnvError::NotSet { key } | EnvError::NotUnicode { key } | EnvError::Parse { key, .. } => {
                key
            }
        }
    }
}
