use log::{debug, warn};

use crate::extractors::{metadata, nutrition, sections, tags, title};
use crate::model::{ParsedRecipe, RecipeContent, RecipeRecord};

/// Keywords whose presence (anywhere, case-insensitive) marks text as
/// plausibly being a recipe. None of them present means the text is
/// rejected outright.
const RECIPE_INDICATORS: &[&str] = &[
    "ingredient",
    "instructions",
    "steps",
    "recipe",
    "cook",
    "preparation",
    "make",
    "directions",
    "method",
    "serves",
    "serving",
    "cal",
    "calories",
    "protein",
    "carb",
    "fat",
];

/// Title used when even the raw text offers nothing usable.
const FALLBACK_TITLE: &str = "Untitled Recipe";

/// Parse raw AI response text into a structured recipe.
///
/// Returns `None` when the text contains no recipe-indicator keyword at all.
/// Otherwise the field extractors run independently and the result is
/// assembled; a parse where both ingredients and instructions came up empty
/// is logged as degraded but still returned — partial recipes are preferable
/// to silent data loss.
pub fn parse_recipe(text: &str) -> Option<ParsedRecipe> {
    let haystack = text.to_lowercase();
    if !RECIPE_INDICATORS.iter().any(|k| haystack.contains(k)) {
        debug!("no recipe indicators found, rejecting text");
        return None;
    }

    let title = title::extract_title(text);
    let ingredients = sections::extract_ingredients(text);
    let instructions = sections::extract_instructions(text);
    let tips = sections::extract_tips(text);

    if ingredients.is_empty() && instructions.is_empty() {
        warn!("degraded parse for '{title}': no ingredient or instruction lines found");
    }

    let content = RecipeContent {
        title: title.clone(),
        ingredients,
        instructions,
        tips: if tips.is_empty() { None } else { Some(tips) },
        servings: metadata::extract_servings(text),
        prep_time: metadata::extract_prep_time(text),
        cook_time: metadata::extract_cook_time(text),
        total_time: metadata::extract_total_time(text),
    };

    Some(ParsedRecipe {
        title,
        content,
        nutrition: nutrition::extract_nutrition(text),
        tags: tags::generate_tags(text),
    })
}

/// Total entry point: every input, including empty or binary garbage,
/// produces a persistable record.
///
/// When [`parse_recipe`] rejects the text, a deterministic placeholder
/// record is built instead (tagged `ai-generated`), titled from the first
/// non-blank line where possible.
pub fn parse_recipe_record(text: &str) -> RecipeRecord {
    match parse_recipe(text) {
        Some(recipe) => recipe.into(),
        None => {
            debug!("building fallback record for unparseable text");
            RecipeRecord::fallback(fallback_title(text))
        }
    }
}

/// First non-blank line stripped of markdown markers, when its length is
/// reasonable; otherwise the fixed fallback title.
fn fallback_title(text: &str) -> String {
    let candidate = text
        .lines()
        .map(|line| line.trim().trim_matches(|c| matches!(c, '#' | '*' | '_' | '-')).trim())
        .find(|line| !line.is_empty());

    match candidate {
        Some(line) if line.chars().count() > 3 && line.chars().count() < 100 => line.to_string(),
        _ => FALLBACK_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = "\
# Spicy Thai Basil Chicken

A quick weeknight dinner with bold thai flavors.

Servings: 4
Prep time: 15 minutes
Cook time: 20 minutes

**Ingredients**
- 500g chicken thighs
- 2 cloves garlic
- 1 cup basil leaves

**Instructions**
1. Heat oil in a wok
2. Fry garlic until fragrant
3. Add chicken and cook through

**Tips**
- Use holy basil if you can find it

**Nutrition (per serving)**
420 calories, 38g protein, 12g fat
";

    #[test]
    fn test_full_parse() {
        let recipe = parse_recipe(FULL_RESPONSE).unwrap();
        assert_eq!(recipe.title, "Spicy Thai Basil Chicken");
        assert_eq!(recipe.content.ingredients.len(), 3);
        assert_eq!(recipe.content.instructions.len(), 3);
        assert_eq!(
            recipe.content.tips.as_deref(),
            Some(&["Use holy basil if you can find it".to_string()][..])
        );
        assert_eq!(recipe.content.servings, Some(4));
        assert_eq!(recipe.content.prep_time.as_deref(), Some("15 minutes"));
        assert_eq!(recipe.content.cook_time.as_deref(), Some("20 minutes"));
        assert_eq!(recipe.content.total_time, None);

        let nutrition = recipe.nutrition.unwrap();
        assert_eq!(nutrition.calories, Some(420));
        assert_eq!(nutrition.protein, Some(38));
        assert_eq!(nutrition.fat, Some(12));
        assert_eq!(nutrition.carbs, None);

        assert!(recipe.tags.contains(&"thai".to_string()));
        assert!(recipe.tags.contains(&"dinner".to_string()));
    }

    #[test]
    fn test_non_recipe_rejected() {
        assert!(parse_recipe("The weather is nice today.").is_none());
    }

    #[test]
    fn test_degraded_parse_still_returned() {
        let text = "Recipe: Mystery Stew\nNo structure here, just cook something.";
        let recipe = parse_recipe(text).unwrap();
        assert_eq!(recipe.title, "Mystery Stew");
        assert!(recipe.content.ingredients.is_empty());
        assert!(recipe.content.instructions.is_empty());
    }

    #[test]
    fn test_fallback_record_for_non_recipe() {
        let record = parse_recipe_record("The weather is nice today.");
        assert_eq!(record.title, "The weather is nice today.");
        assert_eq!(record.tags, vec!["ai-generated"]);
        assert_eq!(
            record.content_json.ingredients,
            vec!["Recipe parsing failed - please regenerate"]
        );
    }

    #[test]
    fn test_fallback_title_strips_markers() {
        let record = parse_recipe_record("## Sunny thoughts\nnothing to do with food");
        assert_eq!(record.title, "Sunny thoughts");
        assert_eq!(record.tags, vec!["ai-generated"]);
    }

    #[test]
    fn test_fallback_title_literal_for_empty_input() {
        let record = parse_recipe_record("");
        assert_eq!(record.title, "Untitled Recipe");
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let text = "**Ingredients**\n- beans\n\n**Instructions**\n1. Warm the beans";
        let recipe = parse_recipe(text).unwrap();
        assert_eq!(recipe.content.servings, None);
        assert_eq!(recipe.content.prep_time, None);
        assert_eq!(recipe.content.cook_time, None);
        assert_eq!(recipe.content.total_time, None);
        assert!(recipe.nutrition.is_none());
        assert!(recipe.content.tips.is_none());
    }
}
