//! Typed, cached access to environment variables.
//!
//! This crate reads process environment variables, optionally seeded from
//! `.env`-style files, and parses them into strings, booleans, integers,
//! floats and durations. The string resolution of each key is memoized in an
//! [`EnvConfig`] owned by the application.
//!
//! ```no_run
//! use std::time::Duration;
//! use envcache::EnvConfig;
//!
//! let mut config = EnvConfig::new();
//! // SAFETY: runs before any other thread is spawned.
//! unsafe { config.load([".env", ".env.local"])? };
//!
//! let host = config.get_string("APP_HOST", "127.0.0.1");
//! let port = config.get::<u16>("APP_PORT", 8080);
//! let timeout = config.get_duration("APP_TIMEOUT", Duration::from_secs(30));
//! let token = config.must_get_string("APP_TOKEN");
//! # let _ = (host, port, timeout, token);
//! # Ok::<(), envcache::LoadError>(())
//! ```
//!
//! Loading writes to the process environment, so [`EnvConfig::load`] is
//! `unsafe`. Call it during single-threaded startup, before any other thread
//! reads environment variables.

mod accessors;
mod cache;
mod config;
pub mod constants;
pub mod env;
mod error;
pub mod loader;
mod must;
mod parse;

pub use cache::{CachedVar, VarCache};
pub use config::EnvConfig;
pub use error::EnvError;
pub use loader::{Assignment, LoadError, parse_line, parse_str};
pub use parse::{FromEnvValue, ParseBoolError};
