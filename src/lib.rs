//! Heuristic parsing of AI-generated recipe text into structured records.
//!
//! The core entry points are [`parse_recipe`] (returns `None` for text that
//! does not resemble a recipe) and [`parse_recipe_record`] (total: always
//! returns a persistable [`RecipeRecord`], falling back to a placeholder for
//! unparseable input). [`PriceEstimator`] is a collaborator that queries a
//! grocery price API for the extracted ingredient lines.
//!
//! ```
//! use recipe_parser::parse_recipe_record;
//!
//! let record = parse_recipe_record("# Pancakes\n**Ingredients**\n- 2 eggs\n- 1 cup flour\n\n**Instructions**\n1. Mix\n2. Fry");
//! assert_eq!(record.title, "Pancakes");
//! assert_eq!(record.content_json.ingredients.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod parser;
pub mod pricing;

pub use config::{AppConfig, PricingConfig};
pub use error::ParserError;
pub use model::{ParsedRecipe, RecipeContent, RecipeNutrition, RecipeRecord};
pub use parser::{parse_recipe, parse_recipe_record};
pub use pricing::{Confidence, PriceEstimate, PriceEstimator};
