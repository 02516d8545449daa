use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A master food item with nutrient densities recorded per 100g.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    /// Comma-separated alternative names used for fuzzy matching.
    pub aliases: String,
    pub description: String,
}

impl Ingredient {
    pub fn aliases_list(&self) -> Vec<String> {
        if self.aliases.is_empty() {
            return Vec::new();
        }
        self.aliases
            .split(',')
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// Nutrient density fact: amount of one nutrient per 100g of one ingredient.
/// Unique per (ingredient, nutrient) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientNutrient {
    pub ingredient_id: Uuid,
    pub nutrient_id: Uuid,
    pub value_per_100g: f64,
}
