use regex::Regex;
use std::sync::LazyLock;

use super::{list_entries, section_body};

static INGREDIENTS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*\s*ingredients?\s*:?\s*\*\*:?").unwrap());

static INSTRUCTIONS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*\s*instructions?\s*:?\s*\*\*:?").unwrap());

static TIPS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*\s*(?:tips|variations|notes)\s*:?\s*\*\*:?").unwrap());

/// Lines of the `**Ingredients**` section. Empty when the section is absent.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    extract_list(text, &INGREDIENTS_HEADING)
}

/// Steps of the `**Instructions**` section, in cooking order.
pub fn extract_instructions(text: &str) -> Vec<String> {
    extract_list(text, &INSTRUCTIONS_HEADING)
}

/// Entries of a `**Tips**` / `**Variations**` / `**Notes**` section.
pub fn extract_tips(text: &str) -> Vec<String> {
    extract_list(text, &TIPS_HEADING)
}

fn extract_list(text: &str, heading: &Regex) -> Vec<String> {
    section_body(text, heading).map(list_entries).unwrap_or_default()
}
