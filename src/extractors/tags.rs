use regex::Regex;
use std::sync::LazyLock;

/// Cuisine labels, matched as verbatim substrings.
const CUISINES: &[&str] = &[
    "italian",
    "mexican",
    "chinese",
    "indian",
    "thai",
    "japanese",
    "korean",
    "vietnamese",
    "french",
    "greek",
    "spanish",
    "mediterranean",
    "middle eastern",
    "moroccan",
    "american",
    "cajun",
];

/// Meal-type labels, matched as verbatim substrings.
const MEAL_TYPES: &[&str] = &[
    "breakfast",
    "brunch",
    "lunch",
    "dinner",
    "dessert",
    "appetizer",
    "snack",
    "side dish",
];

/// Dietary labels. Hyphens match with an optional hyphen or whitespace in
/// the text ("gluten free" tags as "gluten-free"); this normalization is
/// applied to the dietary vocabulary only.
const DIETARY: &[&str] = &[
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "nut-free",
    "sugar-free",
    "low-carb",
    "low-fat",
    "high-protein",
    "keto",
    "paleo",
];

/// Cooking-method labels, matched as verbatim substrings.
const METHODS: &[&str] = &[
    "baked",
    "grilled",
    "roasted",
    "fried",
    "steamed",
    "sauteed",
    "braised",
    "poached",
    "slow cooker",
    "air fryer",
    "stir-fry",
    "no-bake",
];

static DIETARY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DIETARY
        .iter()
        .map(|term| {
            // vocabulary terms are plain letters and hyphens
            let pattern = term.replace('-', r"[-\s]?");
            (*term, Regex::new(&format!("(?i){pattern}")).unwrap())
        })
        .collect()
});

/// Tag labels found anywhere in the text.
///
/// Scans the four vocabularies in order (cuisines, meal types, dietary,
/// methods). Matching is case-insensitive and substring-based, with no word
/// boundaries ("thai" inside "thailand" matches). Duplicates are removed;
/// first-occurrence scan order is kept, no further sorting.
pub fn generate_tags(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for term in CUISINES.iter().chain(MEAL_TYPES.iter()) {
        if haystack.contains(term) {
            push_unique(&mut tags, term);
        }
    }

    for (term, pattern) in DIETARY_PATTERNS.iter() {
        if pattern.is_match(&haystack) {
            push_unique(&mut tags, term);
        }
    }

    for term in METHODS {
        if haystack.contains(term) {
            push_unique(&mut tags, term);
        }
    }

    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
