//! Fallback-style accessors.
//!
//! Responsibilities:
//! - Resolve a key through the cache, then the environment.
//! - Parse the resolved string into the requested type.
//! - Return the caller's fallback when the key is unset or unparsable.
//!
//! Does NOT handle:
//! - Failing loudly on missing variables (see `must.rs`).
//!
//! Invariants:
//! - These accessors never fail. Parse failures are logged at warn level with
//!   the key and the error, then the fallback is returned.
//! - The first resolution of a key is pinned until `clear_cache`. Present values
//!   are pinned as-is; absent keys are pinned as `Unset` by typed accessors and
//!   as the fallback string by `get_string`.
//! - `get_string` treats an empty value as unset. Typed accessors do not: an
//!   empty value is cached and fails to parse.

use std::time::Duration;

use crate::cache::CachedVar;
use crate::config::EnvConfig;
use crate::env::ReadEnv;
use crate::parse::FromEnvValue;

impl<E: ReadEnv> EnvConfig<E> {
    /// Resolve `key` to a string, or `fallback` if it is unset or empty.
    ///
    /// The resolved string is cached, including the fallback: a later call
    /// with a different fallback returns the first one until the cache is
    /// cleared.
    pub fn get_string(&mut self, key: &str, fallback: &str) -> String {
        match self.cache.get(key) {
            Some(CachedVar::Value(value)) => return value.clone(),
            Some(CachedVar::Unset) => return fallback.to_string(),
            None => {}
        }

        let value = match self.read_var(key) {
            Some(value) if !value.is_empty() => value,
            _ => fallback.to_string(),
        };
        self.cache.insert_value(key, value.clone());
        value
    }

    /// Resolve `key` and parse it as `T`, or return `fallback`.
    pub fn get<T: FromEnvValue>(&mut self, key: &str, fallback: T) -> T {
        let Some(raw) = self.resolve_raw(key) else {
            return fallback;
        };

        match T::from_env_value(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "Failed to parse {} as {}",
                    key,
                    T::KIND
                );
                fallback
            }
        }
    }

    pub fn get_bool(&mut self, key: &str, fallback: bool) -> bool {
        self.get(key, fallback)
    }

    pub fn get_int(&mut self, key: &str, fallback: i64) -> i64 {
        self.get(key, fallback)
    }

    pub fn get_float(&mut self, key: &str, fallback: f64) -> f64 {
        self.get(key, fallback)
    }

    /// See [`FromEnvValue for Duration`](FromEnvValue) for the accepted format.
    pub fn get_duration(&mut self, key: &str, fallback: Duration) -> Duration {
        self.get(key, fallback)
    }

    /// Cached raw string for `key`, reading and pinning it on first use.
    fn resolve_raw(&mut self, key: &str) -> Option<String> {
        if let Some(cached) = self.cache.get(key) {
            return cached.as_value().map(str::to_owned);
        }

        match self.read_var(key) {
            Some(raw) => {
                self.cache.insert_value(key, raw.clone());
                Some(raw)
            }
            None => {
                self.cache.insert_unset(key);
                None
            }
        }
    }
}
