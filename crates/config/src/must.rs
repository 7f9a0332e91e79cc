//! Must-style and `try_get` accessors.
//!
//! These read the environment directly: they never consult or populate the
//! cache. `must_get*` panics with the `EnvError` message when the variable is
//! unset or unparsable; `try_get*` returns that error instead.

use std::env::VarError;
use std::time::Duration;

use crate::config::EnvConfig;
use crate::env::ReadEnv;
use crate::error::EnvError;
use crate::parse::FromEnvValue;

impl<E: ReadEnv> EnvConfig<E> {
    /// Read `key` as-is. An explicitly empty value is returned as `""`.
    pub fn try_get_string(&self, key: &str) -> Result<String, EnvError> {
        self.env.var(key).map_err(|e| match e {
            VarError::NotPresent => EnvError::NotSet {
                key: key.to_string(),
            },
            VarError::NotUnicode(_) => EnvError::NotUnicode {
                key: key.to_string(),
            },
        })
    }

    /// Read `key` and parse it as `T`.
    pub fn try_get<T: FromEnvValue>(&self, key: &str) -> Result<T, EnvError> {
        let raw = self.try_get_string(key)?;
        T::from_env_value(&raw).map_err(|e| EnvError::Parse {
            key: key.to_string(),
            kind: T::KIND,
            source: Box::new(e),
        })
    }

    /// Read `key`, panicking if it is unset.
    #[track_caller]
    pub fn must_get_string(&self, key: &str) -> String {
        match self.try_get_string(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Read `key` as `T`, panicking if it is unset or unparsable.
    #[track_caller]
    pub fn must_get<T: FromEnvValue>(&self, key: &str) -> T {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    #[track_caller]
    pub fn must_get_bool(&self, key: &str) -> bool {
        self.must_get(key)
    }

    #[track_caller]
    pub fn must_get_int(&self, key: &str) -> i64 {
        self.must_get(key)
    }

    #[track_caller]
    pub fn must_get_float(&self, key: &str) -> f64 {
        self.must_get(key)
    }

    #[track_caller]
    pub fn must_get_duration(&self, key: &str) -> Duration {
        self.must_get(key)
    }
}
