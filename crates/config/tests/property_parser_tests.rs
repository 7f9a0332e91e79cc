//! Property-based tests for env file parsing.
//!
//! Test coverage:
//! - Quoting: exactly one layer of matching quotes is removed.
//! - Ordering: the last assignment of a key wins when applied.
//! - Comments: `#` lines never produce assignments.
//! - Whitespace: surrounding whitespace never reaches keys or values.

use std::collections::HashMap;

use envcache::env::{InMemoryEnv, ReadEnv};
use envcache::{EnvConfig, parse_line, parse_str};
use proptest::prelude::*;

/// Strategy for environment-style keys.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}".prop_map(String::from)
}

/// Strategy for unquoted values without leading/trailing whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9_./:@-]{1,24}".prop_map(String::from),
        "[a-z]{1,8} [a-z]{1,8}".prop_map(String::from),
    ]
}

fn quote_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('"'), Just('\'')]
}

proptest! {
    #[test]
    fn prop_plain_assignment_round_trips(key in key_strategy(), value in value_strategy()) {
        let line = format!("{key}={value}");
        prop_assert_eq!(parse_line(&line), Some((key, value)));
    }

    #[test]
    fn prop_surrounding_whitespace_is_trimmed(
        key in key_strategy(),
        value in value_strategy(),
        pad in "[ \t]{0,4}",
    ) {
        let line = format!("{pad}{key}{pad}={pad}{value}{pad}");
        prop_assert_eq!(parse_line(&line), Some((key, value)));
    }

    #[test]
    fn prop_exactly_one_quote_layer_is_stripped(
        key in key_strategy(),
        value in value_strategy(),
        outer in quote_strategy(),
        inner in quote_strategy(),
    ) {
        let once = format!("{key}={outer}{value}{outer}");
        prop_assert_eq!(parse_line(&once), Some((key.clone(), value.clone())));

        let twice = format!("{key}={outer}{inner}{value}{inner}{outer}");
        prop_assert_eq!(parse_line(&twice), Some((key, format!("{inner}{value}{inner}"))));
    }

    #[test]
    fn prop_comment_lines_never_assign(body in "[^\n\r]{0,40}", pad in "[ \t]{0,4}") {
        let line = format!("{pad}#{body}");
        prop_assert_eq!(parse_line(&line), None);
    }

    #[test]
    fn prop_last_assignment_wins(
        assignments in prop::collection::vec((key_strategy(), value_strategy()), 1..20),
    ) {
        let contents: String = assignments
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();

        let parsed = parse_str(&contents);
        prop_assert_eq!(parsed.len(), assignments.len());

        let expected: HashMap<&str, &str> = assignments
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(&path, &contents).unwrap();

        let mut config = EnvConfig::with_env(InMemoryEnv::new());
        // SAFETY: the in-memory backend never touches the process environment.
        unsafe { config.load([&path]) }.unwrap();

        for (key, value) in expected {
            prop_assert_eq!(config.env().var(key).unwrap(), value);
        }
    }
}
