use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Title accepted only when strictly between these character counts.
const MIN_TITLE_CHARS: usize = 3;
const MAX_TITLE_CHARS: usize = 100;

/// Primary cascade, most specific first. First acceptable capture wins.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // A line beginning with a single markdown heading marker
        r"(?m)^#\s+(.+)$",
        // A line wholly wrapped in bold markers
        r"(?m)^\*\*([^*\n]+)\*\*\s*$",
        // Looser: one or two heading markers
        r"(?m)^#{1,2}\s+(.+)$",
        // A bold phrase followed by a blank line or end of text
        r"\*\*([^*\n]+)\*\*[ \t]*(?:\r?\n[ \t]*\r?\n|\s*\z)",
        // "Recipe: <title>"
        r"(?im)^recipe:\s*(.+)$",
        // "<title> Recipe"
        r"(?im)^(.+?)\s+recipe\s*$",
        // Fallback: the first line of text, verbatim
        r"^([^\r\n]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Secondary cascade used when nothing in the primary list is acceptable.
static PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)recipe\s+for\s+([^\r\n.,!?]+)",
        r"(?i)making\s+([^\r\n.,!?]+)",
        r"(?i)how\s+to\s+make\s+([^\r\n.,!?]+)",
        r"\*\*([^*\n]+)\*\*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LEADING_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:recipe|cook|make):\s*").unwrap());

static TRAILING_RECIPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+recipe$").unwrap());

/// Best-guess recipe title from raw text.
///
/// Tries the primary pattern cascade, then loose phrases, then the first
/// non-blank line truncated to 50 characters. Never returns an empty string:
/// blank input yields the literal `"Recipe"`.
pub fn extract_title(text: &str) -> String {
    for pattern in TITLE_PATTERNS.iter().chain(PHRASE_PATTERNS.iter()) {
        let candidate = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        if let Some(candidate) = candidate {
            if let Some(title) = clean_candidate(candidate) {
                debug!("title matched pattern: {}", pattern.as_str());
                return title;
            }
        }
    }

    first_line_title(text)
}

/// Strip known prefixes/suffixes and enforce the length bounds.
fn clean_candidate(candidate: &str) -> Option<String> {
    let cleaned = LEADING_VERB.replace(candidate.trim(), "");
    let cleaned = TRAILING_RECIPE.replace(&cleaned, "");
    let cleaned = cleaned.trim();
    let chars = cleaned.chars().count();
    if chars > MIN_TITLE_CHARS && chars < MAX_TITLE_CHARS {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// First non-blank line truncated to 50 characters, or the literal "Recipe".
fn first_line_title(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(50).collect())
        .unwrap_or_else(|| "Recipe".to_string())
}
