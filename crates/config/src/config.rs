//! The application-owned resolution context.
//!
//! Responsibilities:
//! - Own the environment backend and the variable cache.
//! - Read variables from the backend, reporting non-Unicode values.
//!
//! Does NOT handle:
//! - Typed accessors (see `accessors.rs` and `must.rs`).
//! - File loading (see `loader`).
//!
//! Invariants / Assumptions:
//! - There is no implicit global instance. Applications construct one at
//!   startup and pass it to call sites.
//! - Cache mutation requires `&mut self`, so a single instance is never
//!   mutated from two places at once.

use std::env::VarError;

use crate::cache::VarCache;
use crate::env::{ReadEnv, SystemEnv};

/// Typed, cached access to an environment.
#[derive(Debug, Default)]
pub struct EnvConfig<E = SystemEnv> {
    pub(crate) env: E,
    pub(crate) cache: VarCache,
}

impl EnvConfig<SystemEnv> {
    /// Create a context over the process environment.
    pub fn new() -> Self {
        Self::with_env(SystemEnv)
    }
}

impl<E> EnvConfig<E> {
    /// Create a context over an arbitrary environment backend.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            cache: VarCache::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn cache(&self) -> &VarCache {
        &self.cache
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Forget every cached resolution.
    ///
    /// Call this whenever the environment may have changed underneath the
    /// cache. Successful loads call it automatically.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl<E: ReadEnv> EnvConfig<E> {
    /// Look up `key` in the backend. Non-Unicode values are reported and
    /// treated as absent.
    pub(crate) fn read_var(&self, key: &str) -> Option<String> {
        match self.env.var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(key = %key, "Environment variable is not valid unicode, treating as unset");
                None
            }
        }
    }
}
