use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, ingredient::entities::Ingredient};

/// Serving units accepted on labels.
pub const SERVING_UNITS: [&str; 3] = ["g", "ml", "piece"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub serving_size: f64,
    /// Stored as text: an empty unit is a finding the compliance checker
    /// reports, not a state the type system should make unrepresentable.
    pub serving_unit: String,
    pub servings_per_pack: f64,
    pub brand_name: String,
    pub manufacturer: String,
    pub fssai_license: String,
    pub allergen_info: String,
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        serving_size: f64,
        serving_unit: String,
        servings_per_pack: f64,
        brand_name: String,
        manufacturer: String,
        fssai_license: String,
        allergen_info: String,
        owner: Option<Uuid>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            description,
            serving_size,
            serving_unit,
            servings_per_pack,
            brand_name,
            manufacturer,
            fssai_license,
            allergen_info,
            owner,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One weighted ingredient row of a recipe. A recipe never lists the same
/// ingredient twice; setting an existing ingredient replaces its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub recipe_id: Uuid,
    pub ingredient: Ingredient,
    pub weight_grams: f64,
}

/// Sum of all ingredient weights in grams. Always derived from the current
/// rows, never cached.
pub fn total_weight(rows: &[RecipeIngredient]) -> f64 {
    rows.iter().map(|r| r.weight_grams).sum()
}

/// Label-format ingredient declaration: descending order of weight,
/// "Name (Ng)", comma-joined.
pub fn ingredient_list_string(rows: &[RecipeIngredient]) -> String {
    let mut sorted: Vec<&RecipeIngredient> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        b.weight_grams
            .partial_cmp(&a.weight_grams)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
        .iter()
        .map(|r| format!("{} ({}g)", r.ingredient.name, r.weight_grams))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Append-only snapshot of a recipe's full computed state at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeVersion {
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Sequential per recipe, starting at 1.
    pub version_number: i32,
    #[schema(value_type = Object)]
    pub snapshot: serde_json::Value,
    pub is_compliant: bool,
    pub change_summary: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeVersion {
    pub fn new(
        recipe_id: Uuid,
        version_number: i32,
        snapshot: serde_json::Value,
        is_compliant: bool,
        change_summary: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            version_number,
            snapshot,
            is_compliant,
            change_summary,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, weight: f64) -> RecipeIngredient {
        RecipeIngredient {
            recipe_id: Uuid::nil(),
            ingredient: Ingredient {
                id: Uuid::new_v4(),
                name: name.to_string(),
                category: None,
                aliases: String::new(),
                description: String::new(),
            },
            weight_grams: weight,
        }
    }

    #[test]
    fn total_weight_sums_rows() {
        let rows = vec![row("Rice", 100.0), row("Salt", 5.0)];
        assert_eq!(total_weight(&rows), 105.0);
        assert_eq!(total_weight(&[]), 0.0);
    }

    #[test]
    fn ingredient_list_descends_by_weight() {
        let rows = vec![row("Salt", 5.0), row("Rice", 100.0), row("Oil", 20.0)];
        assert_eq!(
            ingredient_list_string(&rows),
            "Rice (100g), Oil (20g), Salt (5g)"
        );
    }
}
