use serde::{Deserialize, Serialize};

/// Structured recipe body extracted from raw text.
///
/// `ingredients` and `instructions` keep their original line order; both may
/// legitimately be empty when the source text had no recognizable sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeContent {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(rename = "cookTime", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
}

/// Per-nutrient values found in a nutrition section.
///
/// Absent fields mean "unknown", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<u32>,
}

impl RecipeNutrition {
    /// True when no nutrient was found at all.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.fiber.is_none()
            && self.sugar.is_none()
    }
}

/// Assembler output for text that passed the recipe-indicator gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub content: RecipeContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<RecipeNutrition>,
    pub tags: Vec<String>,
}

/// Persistence-ready envelope handed to the storage layer.
///
/// Always constructible: unparseable input yields the placeholder record
/// from [`RecipeRecord::fallback`], never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    pub content_json: RecipeContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<RecipeNutrition>,
    pub tags: Vec<String>,
}

impl From<ParsedRecipe> for RecipeRecord {
    fn from(recipe: ParsedRecipe) -> Self {
        Self {
            title: recipe.title,
            content_json: recipe.content,
            nutrition: recipe.nutrition,
            tags: recipe.tags,
        }
    }
}

impl RecipeRecord {
    /// Placeholder record for text the assembler judged non-recipe.
    pub fn fallback(title: String) -> Self {
        Self {
            content_json: RecipeContent {
                title: title.clone(),
                ingredients: vec!["Recipe parsing failed - please regenerate".to_string()],
                instructions: vec!["Please try generating again".to_string()],
                ..Default::default()
            },
            title,
            nutrition: None,
            tags: vec!["ai-generated".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_empty() {
        assert!(RecipeNutrition::default().is_empty());
        let partial = RecipeNutrition {
            calories: Some(350),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let content = RecipeContent {
            title: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            instructions: vec!["toast it".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert!(json.get("servings").is_none());
        assert!(json.get("prepTime").is_none());
        assert!(json.get("tips").is_none());
    }

    #[test]
    fn test_nutrition_partial_serialization() {
        let nutrition = RecipeNutrition {
            calories: Some(350),
            ..Default::default()
        };
        let json = serde_json::to_value(&nutrition).unwrap();
        assert_eq!(json["calories"], 350);
        assert!(json.get("protein").is_none());
        assert!(json.get("sugar").is_none());
    }

    #[test]
    fn test_fallback_record_shape() {
        let record = RecipeRecord::fallback("Untitled Recipe".to_string());
        assert_eq!(record.title, "Untitled Recipe");
        assert_eq!(record.content_json.title, "Untitled Recipe");
        assert_eq!(
            record.content_json.ingredients,
            vec!["Recipe parsing failed - please regenerate"]
        );
        assert_eq!(
            record.content_json.instructions,
            vec!["Please try generating again"]
        );
        assert_eq!(record.tags, vec!["ai-generated"]);
        assert!(record.nutrition.is_none());
    }
}
