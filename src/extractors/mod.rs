//! Heuristic field extractors.
//!
//! Each submodule scans the raw response text independently and pulls one
//! field. All of them are pure functions over `&str`; a field that cannot be
//! found is reported as absent, never as an error.

use regex::Regex;
use std::sync::LazyLock;

pub mod metadata;
pub mod nutrition;
pub mod sections;
pub mod tags;
pub mod title;

/// A section ends at the next bold heading, a blank-line gap, or end of text.
static SECTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\r?\n|\n[ \t]*\*\*").unwrap());

/// Lines that count as list entries: bullet or numeric marker, then whitespace.
static LIST_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*•]|\d+\.)\s+(.*)$").unwrap());

/// Slice out the body of a labeled section.
///
/// The body starts right after the heading match and runs until the next
/// bold heading or blank-line gap. Returns `None` when the heading is absent;
/// malformed markers simply fail to match and degrade to "section not found".
pub(crate) fn section_body<'a>(text: &'a str, heading: &Regex) -> Option<&'a str> {
    let found = heading.find(text)?;
    let rest = &text[found.end()..];
    let end = SECTION_BOUNDARY
        .find(rest)
        .map_or(rest.len(), |b| b.start());
    Some(&rest[..end])
}

/// Collect list entries from a section body, preserving line order.
///
/// The marker and surrounding whitespace are stripped; entries that become
/// empty after stripping are discarded.
pub(crate) fn list_entries(body: &str) -> Vec<String> {
    LIST_ENTRY
        .captures_iter(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
