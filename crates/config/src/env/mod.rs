//! Backends for the key/value table accessors read and the loader writes.
//!
//! Responsibilities:
//! - Define the read and write capabilities `EnvConfig` needs from an environment.
//! - Provide the process environment backend (`SystemEnv`).
//! - Provide an isolated in-memory backend for tests (`InMemoryEnv`).
//!
//! Invariants:
//! - `SystemEnv` is the only place in non-test code that mutates the process environment.
//!
//! ```
//! use envcache::env::{ReadEnv, SystemEnv};
//!
//! fn database_url<E: ReadEnv>(env: &E) -> String {
//!     env.var("DATABASE_URL")
//!         .unwrap_or_else(|_| "postgres://localhost".to_string())
//! }
//!
//! let url = database_url(&SystemEnv);
//! # let _ = url;
//! ```

mod in_memory;
mod system;

use std::env::VarError;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

/// Read access to an environment table.
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

/// Write access to an environment table.
pub trait WriteEnv {
    /// Set `key` to `value`.
    ///
    /// # Safety
    ///
    /// For backends that write the process environment, no other thread may
    /// read or write the environment for the duration of the call. See
    /// [`std::env::set_var`].
    ///
    /// `key` must be non-empty and contain neither `=` nor NUL, and `value`
    /// must not contain NUL.
    unsafe fn set_var(&self, key: &str, value: &str);
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl<E: WriteEnv + ?Sized> WriteEnv for &E {
    unsafe fn set_var(&self, key: &str, value: &str) {
        // SAFETY: the caller upholds the contract of `WriteEnv::set_var`.
        unsafe { (**self).set_var(key, value) }
    }
}
