use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    common::{round1, round3},
    ingredient::entities::IngredientNutrient,
    labeling::entities::{IngredientContribution, NutrientAttribution},
    recipe::entities::{RecipeIngredient, total_weight},
};

/// How many contributors an attribution reports.
const TOP_CONTRIBUTORS: usize = 5;

/// Decompose one nutrient's recipe total into ranked per-ingredient
/// contributions.
///
/// `current_per_100g` is the aggregated value the FOP classifier saw and
/// `threshold` the limit it was compared against. Ingredients without a
/// recorded value for the nutrient are excluded, not errors.
pub fn attribute(
    nutrient_id: Uuid,
    nutrient_name: &str,
    unit: &str,
    current_per_100g: f64,
    threshold: f64,
    rows: &[RecipeIngredient],
    facts_by_ingredient: &HashMap<Uuid, Vec<IngredientNutrient>>,
) -> NutrientAttribution {
    let total_wt = match total_weight(rows) {
        w if w > 0.0 => w,
        _ => 1.0,
    };

    // Denominator for percentage shares: the nutrient's absolute mass in
    // the whole recipe, floored to keep the division defined.
    let total_nutrient_mass = (current_per_100g * total_wt / 100.0).max(0.001);

    let mut contributors: Vec<IngredientContribution> = rows
        .iter()
        .filter_map(|row| {
            let value_per_100g = facts_by_ingredient
                .get(&row.ingredient.id)?
                .iter()
                .find(|f| f.nutrient_id == nutrient_id)?
                .value_per_100g;

            let abs = (row.weight_grams / 100.0) * value_per_100g;
            if abs <= 0.0 {
                return None;
            }

            Some(IngredientContribution {
                ingredient: row.ingredient.name.clone(),
                weight_grams: row.weight_grams,
                contribution_abs: round3(abs),
                contribution_per_100g: round3((abs / total_wt) * 100.0),
                pct_of_total: round1((abs / total_nutrient_mass) * 100.0),
            })
        })
        .collect();

    contributors.sort_by(|a, b| {
        b.contribution_abs
            .partial_cmp(&a.contribution_abs)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    contributors.truncate(TOP_CONTRIBUTORS);

    NutrientAttribution {
        nutrient: nutrient_name.to_string(),
        current_per_100g: round3(current_per_100g),
        threshold,
        unit: unit.to_string(),
        top_contributors: contributors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::entities::Ingredient;

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

    fn fact(ingredient_id: Uuid, nutrient_id: Uuid, value: f64) -> IngredientNutrient {
        IngredientNutrient {
            ingredient_id,
            nutrient_id,
            value_per_100g: value,
        }
    }

    #[test]
    fn ranks_contributors_by_absolute_contribution() {
        let sodium = Uuid::new_v4();
        let salt = row("Salt", 5.0);
        let cheese = row("Cheese", 50.0);
        let rice = row("Rice", 100.0);

        let facts = HashMap::from([
            // 5g * 38758mg/100g = 1937.9mg
            (salt.ingredient.id, vec![fact(salt.ingredient.id, sodium, 38758.0)]),
            // 50g * 600mg/100g = 300mg
            (cheese.ingredient.id, vec![fact(cheese.ingredient.id, sodium, 600.0)]),
            // no sodium recorded for rice
            (rice.ingredient.id, vec![]),
        ]);
        let rows = vec![rice, cheese, salt];
        let total_wt: f64 = 155.0;
        let current = (1937.9 + 300.0) / total_wt * 100.0;

        let attribution = attribute(sodium, "Sodium", "mg", current, 600.0, &rows, &facts);

        assert_eq!(attribution.top_contributors.len(), 2);
        assert_eq!(attribution.top_contributors[0].ingredient, "Salt");
        assert_eq!(attribution.top_contributors[0].contribution_abs, 1937.9);
        assert_eq!(attribution.top_contributors[1].ingredient, "Cheese");
        assert_eq!(attribution.top_contributors[1].contribution_abs, 300.0);

        // Shares add up to ~100%.
        let pct_sum: f64 = attribution
            .top_contributors
            .iter()
            .map(|c| c.pct_of_total)
            .sum();
        assert!((pct_sum - 100.0).abs() < 0.5);
    }

    #[test]
    fn ingredient_without_the_nutrient_is_excluded() {
        let sodium = Uuid::new_v4();
        let sugar = Uuid::new_v4();
        let jaggery = row("Jaggery", 40.0);
        let facts = HashMap::from([(
            jaggery.ingredient.id,
            vec![fact(jaggery.ingredient.id, sugar, 85.0)],
        )]);

        let attribution = attribute(sodium, "Sodium", "mg", 0.0, 600.0, &[jaggery], &facts);
        assert!(attribution.top_contributors.is_empty());
    }

    #[test]
    fn truncates_to_top_five() {
        let sugar = Uuid::new_v4();
        let rows: Vec<RecipeIngredient> = (1..=8).map(|i| row(&format!("Sweet {i}"), i as f64 * 10.0)).collect();
        let facts: HashMap<Uuid, Vec<IngredientNutrient>> = rows
            .iter()
            .map(|r| (r.ingredient.id, vec![fact(r.ingredient.id, sugar, 50.0)]))
            .collect();

        let attribution = attribute(sugar, "Total Sugars", "g", 50.0, 22.5, &rows, &facts);
        assert_eq!(attribution.top_contributors.len(), 5);
        // Heaviest ingredient first.
        assert_eq!(attribution.top_contributors[0].ingredient, "Sweet 8");
    }

    #[test]
    fn per_100g_contributions_are_recipe_normalized() {
        let sodium = Uuid::new_v4();
        let salt = row("Salt", 5.0);
        let water = row("Water", 95.0);
        let facts = HashMap::from([(
            salt.ingredient.id,
            vec![fact(salt.ingredient.id, sodium, 40000.0)],
        )]);
        let rows = vec![salt, water];

        let attribution = attribute(sodium, "Sodium", "mg", 2000.0, 600.0, &rows, &facts);
        // 5g * 400mg/g = 2000mg in 100g of recipe.
        assert_eq!(attribution.top_contributors[0].contribution_per_100g, 2000.0);
    }
}
