//! Utility functions for line-level markdown recognition.
//!
//! Shared helper functions used across the parser module.

use regex::Regex;
use std::sync::OnceLock;

/// Marker that opens or closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Split a heading line into its level and raw content.
///
/// A heading is a run of `#` marks at the very start of the line followed by
/// exactly one separator character that is not `#`. The separator is consumed
/// and everything after it is returned untouched, surrounding whitespace
/// included.
///
/// # Examples
///
/// ```
/// # use mdindex::parser::utils::parse_header_line;
/// assert_eq!(parse_header_line("## Usage"), Some((2, "Usage")));
/// assert_eq!(parse_header_line("#  padded "), Some((1, " padded ")));
/// assert_eq!(parse_header_line("not a heading"), None);
/// assert_eq!(parse_header_line("#"), None);
/// ```
pub fn parse_header_line(line: &str) -> Option<(usize, &str)> {
    static HEADER_PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = HEADER_PATTERN.get_or_init(|| Regex::new(r"^(#+)[^#]").unwrap());

    let caps = re.captures(line)?;
    let level = caps.get(1)?.len();
    let content_start = caps.get(0)?.end();

    Some((level, &line[content_start..]))
}

/// Whether the line opens or closes a fenced code block.
///
/// The marker may appear anywhere in the line, with or without an info
/// string after it.
pub fn contains_fence(line: &str) -> bool {
    line.contains(FENCE_MARKER)
}
