use regex::Regex;
use std::sync::LazyLock;

use super::section_body;
use crate::model::RecipeNutrition;

static NUTRITION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*\s*nutrition[^*\n]*\*\*:?").unwrap());

// Whitespace inside these patterns is spaces/tabs only, so a number at the
// end of one line cannot attach to a nutrient name on the next.
static CALORIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)[ \t]*(?:k?cal(?:ories)?)").unwrap());
static CALORIES_LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)calories?:?[ \t]*(\d+)").unwrap());

static PROTEIN: LazyLock<Regex> = LazyLock::new(|| number_first("protein"));
static PROTEIN_LABELED: LazyLock<Regex> = LazyLock::new(|| label_first("protein"));
static CARBS: LazyLock<Regex> = LazyLock::new(|| number_first("carb(?:ohydrate)?s?"));
static CARBS_LABELED: LazyLock<Regex> = LazyLock::new(|| label_first("carb(?:ohydrate)?s?"));
static FAT: LazyLock<Regex> = LazyLock::new(|| number_first("fat"));
static FAT_LABELED: LazyLock<Regex> = LazyLock::new(|| label_first("fat"));
static FIBER: LazyLock<Regex> = LazyLock::new(|| number_first("fib(?:er|re)"));
static FIBER_LABELED: LazyLock<Regex> = LazyLock::new(|| label_first("fib(?:er|re)"));
static SUGAR: LazyLock<Regex> = LazyLock::new(|| number_first("sugars?"));
static SUGAR_LABELED: LazyLock<Regex> = LazyLock::new(|| label_first("sugars?"));

/// `12g protein`, `12 g of protein`, `12 protein`
fn number_first(nutrient: &str) -> Regex {
    Regex::new(&format!(r"(?i)(\d+)[ \t]*g?[ \t]*(?:of[ \t]+)?{nutrient}")).unwrap()
}

/// `protein: 12g`
fn label_first(nutrient: &str) -> Regex {
    Regex::new(&format!(r"(?i){nutrient}:?[ \t]*(\d+)")).unwrap()
}

/// Nutrition facts from a `**Nutrition...**` section.
///
/// Each nutrient is matched independently inside the bounded section;
/// missing nutrients stay `None`. Returns `None` when the section is absent
/// or contributed no values at all.
pub fn extract_nutrition(text: &str) -> Option<RecipeNutrition> {
    let body = section_body(text, &NUTRITION_HEADING)?;

    let nutrition = RecipeNutrition {
        calories: value(body, &CALORIES, &CALORIES_LABELED),
        protein: value(body, &PROTEIN, &PROTEIN_LABELED),
        carbs: value(body, &CARBS, &CARBS_LABELED),
        fat: value(body, &FAT, &FAT_LABELED),
        fiber: value(body, &FIBER, &FIBER_LABELED),
        sugar: value(body, &SUGAR, &SUGAR_LABELED),
    };

    if nutrition.is_empty() {
        None
    } else {
        Some(nutrition)
    }
}

fn value(body: &str, primary: &Regex, fallback: &Regex) -> Option<u32> {
    primary
        .captures(body)
        .or_else(|| fallback.captures(body))
        .and_then(|caps| caps[1].parse().ok())
}
