//! Env file loading.
//!
//! Responsibilities:
//! - Read `.env`-style files in order and write their assignments into the
//!   environment backend.
//! - Clear the variable cache once every file has been applied.
//!
//! Does NOT handle:
//! - Line syntax (see `parser.rs`).
//! - Rolling back assignments applied before a failure.
//!
//! Invariants / Assumptions:
//! - An empty path list means the single default file `.env`.
//! - Missing files are skipped; any other read error aborts the remaining files.
//! - Later assignments overwrite earlier ones, within and across files.
//! - The cache is cleared only when the whole load succeeds.

mod error;
mod parser;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use error::LoadError;
pub use parser::{Assignment, parse_line, parse_str};

use crate::config::EnvConfig;
use crate::constants::DEFAULT_ENV_FILE;
use crate::env::WriteEnv;

impl<E: WriteEnv> EnvConfig<E> {
    /// Load env files in order, last assignment wins.
    ///
    /// With no paths, loads [`DEFAULT_ENV_FILE`]. Files that don't exist are
    /// skipped without error. On success the cache is cleared so subsequent
    /// reads see the new values.
    ///
    /// # Safety
    ///
    /// Every assignment goes through [`WriteEnv::set_var`]. With a backend
    /// that writes the process environment, call this only while no other
    /// thread reads or writes the environment, typically during
    /// single-threaded startup. Keys and values are validated before writing.
    pub unsafe fn load<I, P>(&mut self, paths: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths: Vec<PathBuf> = paths
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        if paths.is_empty() {
            paths.push(PathBuf::from(DEFAULT_ENV_FILE));
        }

        let mut applied = 0;
        for path in &paths {
            // SAFETY: forwarded from this function's contract.
            applied += unsafe { apply_file(&self.env, path)? };
        }

        self.clear_cache();
        tracing::debug!(
            files = paths.len(),
            assignments = applied,
            "Loaded env files"
        );
        Ok(())
    }

    /// Load [`DEFAULT_ENV_FILE`] from the current directory.
    ///
    /// # Safety
    ///
    /// Same contract as [`EnvConfig::load`].
    pub unsafe fn load_default(&mut self) -> Result<(), LoadError> {
        // SAFETY: forwarded from this function's contract.
        unsafe { self.load(std::iter::empty::<&Path>()) }
    }
}

/// Apply one file to `env`, returning how many assignments were written.
///
/// # Safety
///
/// Same threading contract as [`WriteEnv::set_var`].
unsafe fn apply_file<E: WriteEnv>(env: &E, path: &Path) -> Result<usize, LoadError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Env file not found, skipping");
            return Ok(0);
        }
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let assignments = parse_str(&contents);
    for assignment in &assignments {
        if !is_storable(assignment) {
            return Err(LoadError::InvalidAssignment {
                path: path.to_path_buf(),
                line: assignment.line,
            });
        }
        // SAFETY: `is_storable` checked the key and value; threading is the
        // caller's contract.
        unsafe { env.set_var(&assignment.key, &assignment.value) };
    }

    Ok(assignments.len())
}

/// Whether the process environment can hold this assignment.
fn is_storable(assignment: &Assignment) -> bool {
    !assignment.key.is_empty() && !assignment.key.contains('\0') && !assignment.value.contains('\0')
}
