//! Conversion of raw environment strings into typed values.
//!
//! Responsibilities:
//! - Define `FromEnvValue`, the parse contract shared by fallback-style and
//!   must-style accessors.
//! - Implement it for booleans, all primitive integers, floats and `Duration`.
//!
//! Does NOT handle:
//! - Trimming. Values are parsed exactly as stored; the loader trims file values.
//!
//! Invariants:
//! - Parse errors never include the raw value, so secrets don't reach logs.

use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use thiserror::Error;

/// A type that can be parsed from an environment variable's string value.
pub trait FromEnvValue: Sized {
    /// Human-readable type name used in diagnostics ("bool", "i64", ...).
    const KIND: &'static str;

    type Err: std::error::Error + Send + Sync + 'static;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err>;
}

/// The value is not one of the accepted boolean literals.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid boolean literal (expected true/false, t/f or 1/0)")]
pub struct ParseBoolError;

impl FromEnvValue for bool {
    const KIND: &'static str = "bool";
    type Err = ParseBoolError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            _ => Err(ParseBoolError),
        }
    }
}

macro_rules! impl_from_env_value {
    ($err:ty => $($t:ty),+ $(,)?) => {
        $(
            impl FromEnvValue for $t {
                const KIND: &'static str = stringify!($t);
                type Err = $err;

                fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
                    raw.parse()
                }
            }
        )+
    };
}

impl_from_env_value!(ParseIntError => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_env_value!(ParseFloatError => f32, f64);

impl FromEnvValue for Duration {
    const KIND: &'static str = "duration";
    type Err = humantime::DurationError;

    /// Accepts number+unit sequences such as `1s`, `500ms`, `2h45m` or `1.5h`.
    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        humantime::parse_duration(raw)
    }
}
