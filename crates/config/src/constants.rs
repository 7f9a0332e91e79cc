//! Centralized constants for env file loading.

/// File loaded when no paths are given to [`EnvConfig::load`](crate::EnvConfig::load).
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Lines starting with this character (after trimming) are comments.
pub const COMMENT_PREFIX: char = '#';

/// Separates a key from its value on an assignment line.
pub const ASSIGNMENT_SEPARATOR: char = '=';

/// Quote characters stripped (one matching outer pair) from assignment values.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];
