//! Line-oriented `.env` parsing.
//!
//! Responsibilities:
//! - Turn file contents into an ordered list of `Assignment`s.
//!
//! Does NOT handle:
//! - Reading files or writing the environment (see `loader/mod.rs`).
//! - Escape sequences, interpolation, `export` prefixes or multi-line values.
//!
//! Invariants:
//! - Blank lines, `#` comment lines and lines without `=` produce nothing.
//! - Keys and values are trimmed; exactly one matching outer pair of `"` or
//!   `'` is stripped from the value.
//! - Output order equals line order, so later duplicates win when applied.

use crate::constants::{ASSIGNMENT_SEPARATOR, COMMENT_PREFIX, QUOTE_CHARS};

/// One `KEY=VALUE` line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source.
    pub line: usize,
}

/// Parse every assignment in `contents`, in order.
pub fn parse_str(contents: &str) -> Vec<Assignment> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_line(line).map(|(key, value)| Assignment {
                key,
                value,
                line: idx + 1,
            })
        })
        .collect()
}

/// Parse a single line into `(key, value)`.
///
/// Returns `None` for blank lines, comments and lines without `=`.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let (key, value) = line.split_once(ASSIGNMENT_SEPARATOR)?;
    Some((key.trim().to_string(), unquote(value.trim()).to_string()))
}

/// Strip one matching pair of outer quotes.
fn unquote(value: &str) -> &str {
    QUOTE_CHARS
        .iter()
        .find_map(|&quote| {
            value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> Option<(String, String)> {
        Some((key.to_string(), value.to_string()))
    }

    #[test]
    fn test_parse_line_basic_assignment() {
        assert_eq!(parse_line("KEY=VAL"), pair("KEY", "VAL"));
        assert_eq!(parse_line("  KEY  =  VAL  "), pair("KEY", "VAL"));
    }

    #[test]
    fn test_parse_line_skips_blank_comment_and_bare_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
        assert_eq!(parse_line("# KEY=VAL"), None);
        assert_eq!(parse_line("   # indented comment"), None);
        assert_eq!(parse_line("INVALID_LINE_WITHOUT_EQUALS"), None);
    }

    #[test]
    fn test_parse_line_empty_value() {
        assert_eq!(parse_line("EMPTY="), pair("EMPTY", ""));
        assert_eq!(parse_line("EMPTY=   "), pair("EMPTY", ""));
    }

    #[test]
    fn test_parse_line_splits_at_first_equals() {
        assert_eq!(
            parse_line("DATABASE_URL=postgres://u:p@host/db?sslmode=require"),
            pair("DATABASE_URL", "postgres://u:p@host/db?sslmode=require")
        );
        assert_eq!(parse_line("EQ=a=b=c"), pair("EQ", "a=b=c"));
    }

    #[test]
    fn test_parse_line_strips_one_layer_of_quotes() {
        assert_eq!(
            parse_line(r#"QUOTED_DOUBLE="double quoted value""#),
            pair("QUOTED_DOUBLE", "double quoted value")
        );
        assert_eq!(
            parse_line("QUOTED_SINGLE='single quoted value'"),
            pair("QUOTED_SINGLE", "single quoted value")
        );
        assert_eq!(
            parse_line(r#"QUOTED_NESTED="'nested quotes'""#),
            pair("QUOTED_NESTED", "'nested quotes'")
        );
        assert_eq!(parse_line(r#"EMPTY_QUOTES="""#), pair("EMPTY_QUOTES", ""));
    }

    #[test]
    fn test_parse_line_keeps_unmatched_quotes() {
        assert_eq!(parse_line(r#"A="open"#), pair("A", "\"open"));
        assert_eq!(parse_line(r#"B="mixed'"#), pair("B", "\"mixed'"));
        assert_eq!(parse_line(r#"C=""#), pair("C", "\""));
        assert_eq!(parse_line(r#"D=in"side"#), pair("D", "in\"side"));
    }

    #[test]
    fn test_parse_line_keeps_quoted_whitespace_and_escapes() {
        assert_eq!(parse_line(r#"PAD="  padded  ""#), pair("PAD", "  padded  "));
        assert_eq!(parse_line(r#"ESC="a\nb""#), pair("ESC", r"a\nb"));
    }

    #[test]
    fn test_parse_line_keeps_inline_hash() {
        assert_eq!(parse_line("COLOR=#ff0000"), pair("COLOR", "#ff0000"));
        assert_eq!(parse_line("A=b # not a comment"), pair("A", "b # not a comment"));
    }

    #[test]
    fn test_parse_str_tracks_line_numbers_and_order() {
        let contents = "# header\n\nFIRST=1\r\nnot an assignment\nSECOND = \"two\"\nFIRST=3\n";
        let parsed = parse_str(contents);

        let summary: Vec<_> = parsed
            .iter()
            .map(|a| (a.key.as_str(), a.value.as_str(), a.line))
            .collect();
        assert_eq!(
            summary,
            vec![("FIRST", "1", 3), ("SECOND", "two", 5), ("FIRST", "3", 6)]
        );
    }

    #[test]
    fn test_parse_line_empty_key_is_reported() {
        assert_eq!(parse_line("=value"), pair("", "value"));
    }
}
