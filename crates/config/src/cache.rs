//! Memoized string resolutions of environment variables.
//!
//! Invariants:
//! - Once a key is present, accessors must not re-read the environment for it
//!   until the cache is cleared.
//! - Only the raw string resolution is stored; typed values are re-parsed on
//!   every access.

use std::collections::HashMap;

/// What the first fallback-style lookup of a key resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedVar {
    /// A string value, either read from the environment or a pinned fallback.
    Value(String),
    /// The variable was absent when a typed accessor first resolved it.
    Unset,
}

impl CachedVar {
    /// The cached string, if the key resolved to one.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            CachedVar::Value(value) => Some(value),
            CachedVar::Unset => None,
        }
    }
}

/// Mapping from variable name to its cached resolution.
#[derive(Debug, Default, Clone)]
pub struct VarCache {
    entries: HashMap<String, CachedVar>,
}

impl VarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CachedVar> {
        self.entries.get(key)
    }

    pub fn insert_value(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_string(), CachedVar::Value(value.into()));
    }

    pub fn insert_unset(&mut self, key: &str) {
        self.entries.insert(key.to_string(), CachedVar::Unset);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry so the next access re-reads the environment.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
