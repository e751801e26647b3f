use regex::Regex;
use std::sync::LazyLock;

static SERVINGS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)servings?:?\s*(\d+)", r"(?i)serves?\s+(\d+)"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

const DURATION: &str = r"\d+\s*(?:minutes?|mins?|hours?|hrs?)";

static PREP_TIME: LazyLock<Regex> = LazyLock::new(|| time_pattern("prep(?:aration)?"));
static COOK_TIME: LazyLock<Regex> = LazyLock::new(|| time_pattern("cook(?:ing)?"));
static TOTAL_TIME: LazyLock<Regex> = LazyLock::new(|| time_pattern("total"));

fn time_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){label}\s*time:?\s*({DURATION})")).unwrap()
}

/// First serving count mentioned in the text, if any.
pub fn extract_servings(text: &str) -> Option<u32> {
    SERVINGS_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps[1].parse().ok())
}

/// Preparation time as written in the text (e.g. "20 minutes"), unnormalized.
pub fn extract_prep_time(text: &str) -> Option<String> {
    capture_duration(&PREP_TIME, text)
}

/// Cooking time as written in the text, unnormalized.
pub fn extract_cook_time(text: &str) -> Option<String> {
    capture_duration(&COOK_TIME, text)
}

/// Total time as written in the text, unnormalized.
pub fn extract_total_time(text: &str) -> Option<String> {
    capture_duration(&TOTAL_TIME, text)
}

fn capture_duration(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}
