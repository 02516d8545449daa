use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    common::{round1, round2},
    ingredient::entities::IngredientNutrient,
    labeling::entities::NutrientResult,
    nutrient::entities::Nutrient,
    recipe::entities::{RecipeIngredient, total_weight},
};

/// Aggregate a recipe's weighted ingredient rows into per-nutrient totals.
///
/// Pure function of its inputs: each row contributes
/// `(weight_grams / 100) * value_per_100g` to its nutrient's running total.
/// A nutrient appears in the result only if at least one ingredient carries
/// a value for it. Facts referencing a nutrient missing from the catalog are
/// skipped; a partial result beats failing the whole label preview.
///
/// A zero total weight falls back to 1 so the per-serving and per-100g
/// divisions stay defined for ingredient-less recipes.
///
/// The result is ordered by (category display order, nutrient display
/// order), not by accumulation order.
pub fn aggregate(
    serving_size: f64,
    rows: &[RecipeIngredient],
    facts_by_ingredient: &HashMap<Uuid, Vec<IngredientNutrient>>,
    catalog: &HashMap<Uuid, Nutrient>,
) -> Vec<NutrientResult> {
    let mut totals: HashMap<Uuid, f64> = HashMap::new();

    for row in rows {
        let Some(facts) = facts_by_ingredient.get(&row.ingredient.id) else {
            continue;
        };
        for fact in facts {
            if !catalog.contains_key(&fact.nutrient_id) {
                tracing::warn!(
                    nutrient_id = %fact.nutrient_id,
                    ingredient = %row.ingredient.name,
                    "skipping nutrient fact with no catalog entry"
                );
                continue;
            }
            let value = (row.weight_grams / 100.0) * fact.value_per_100g;
            *totals.entry(fact.nutrient_id).or_insert(0.0) += value;
        }
    }

    let total_wt = match total_weight(rows) {
        w if w > 0.0 => w,
        _ => 1.0,
    };

    let mut results: Vec<NutrientResult> = totals
        .into_iter()
        .map(|(nutrient_id, total)| {
            let nutrient = catalog[&nutrient_id].clone();
            let per_serving = (total / total_wt) * serving_size;
            let per_100g = (total / total_wt) * 100.0;
            let percent_dv = match nutrient.daily_value {
                Some(dv) if dv != 0.0 => Some(round1((per_serving / dv) * 100.0)),
                _ => None,
            };

            NutrientResult {
                nutrient,
                total_value: round2(total),
                per_serving: round2(per_serving),
                per_100g: round2(per_100g),
                percent_dv,
            }
        })
        .collect();

    results.sort_by_key(|r| {
        (
            r.nutrient.category.display_order,
            r.nutrient.display_order,
            r.nutrient.name.clone(),
        )
    });

    results
}

/// Per-100g values keyed by nutrient name, the form the FOP classifier and
/// compliance checker consume.
pub fn per_100g_by_name(results: &[NutrientResult]) -> HashMap<String, f64> {
    results
        .iter()
        .map(|r| (r.nutrient.name.clone(), r.per_100g))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ingredient::entities::Ingredient, nutrient::entities::NutrientCategory};

    fn category(name: &str, order: i32) -> NutrientCategory {
        NutrientCategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_order: order,
        }
    }

    fn nutrient(name: &str, unit: &str, dv: Option<f64>, cat: &NutrientCategory, order: i32) -> Nutrient {
        Nutrient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            unit: unit.to_string(),
            category: cat.clone(),
            daily_value: dv,
            display_order: order,
            is_mandatory: true,
        }
    }

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

    /// Rice 100g @ 345kcal/100g + Salt 5g @ 38758mg sodium/100g,
    /// serving size 100.
    fn rice_and_salt() -> (
        Vec<RecipeIngredient>,
        HashMap<Uuid, Vec<IngredientNutrient>>,
        HashMap<Uuid, Nutrient>,
        Uuid,
        Uuid,
    ) {
        let energy_cat = category("Energy", 1);
        let minerals = category("Minerals", 5);
        let energy = nutrient("Energy", "kcal", Some(2000.0), &energy_cat, 1);
        let sodium = nutrient("Sodium", "mg", Some(2300.0), &minerals, 1);
        let (energy_id, sodium_id) = (energy.id, sodium.id);

        let rice = row("Rice", 100.0);
        let salt = row("Salt", 5.0);

        let mut facts = HashMap::new();
        facts.insert(rice.ingredient.id, vec![fact(rice.ingredient.id, energy_id, 345.0)]);
        facts.insert(salt.ingredient.id, vec![fact(salt.ingredient.id, sodium_id, 38758.0)]);

        let catalog = HashMap::from([(energy_id, energy), (sodium_id, sodium)]);

        (vec![rice, salt], facts, catalog, energy_id, sodium_id)
    }

    #[test]
    fn rice_and_salt_scenario() {
        let (rows, facts, catalog, _, _) = rice_and_salt();
        let results = aggregate(100.0, &rows, &facts, &catalog);

        assert_eq!(results.len(), 2);
        let energy = results.iter().find(|r| r.nutrient.name == "Energy").unwrap();
        let sodium = results.iter().find(|r| r.nutrient.name == "Sodium").unwrap();

        assert_eq!(energy.total_value, 345.0);
        assert_eq!(energy.per_100g, 328.57);
        assert_eq!(energy.per_serving, 328.57);

        // 5g of salt at 38758mg/100g is 1937.9mg total.
        assert_eq!(sodium.total_value, 1937.9);
        assert_eq!(sodium.per_100g, 1845.62);
    }

    #[test]
    fn mass_conservation_pre_rounding() {
        let (rows, facts, catalog, _, sodium_id) = rice_and_salt();
        let results = aggregate(100.0, &rows, &facts, &catalog);

        let expected: f64 = rows
            .iter()
            .flat_map(|r| facts.get(&r.ingredient.id).into_iter().flatten().map(move |f| (r, f)))
            .filter(|(_, f)| f.nutrient_id == sodium_id)
            .map(|(r, f)| (r.weight_grams / 100.0) * f.value_per_100g)
            .sum();

        let sodium = results.iter().find(|r| r.nutrient.name == "Sodium").unwrap();
        assert_eq!(sodium.total_value, round2(expected));
    }

    #[test]
    fn per_100g_is_scale_invariant() {
        let (mut rows, facts, catalog, _, _) = rice_and_salt();
        let before = aggregate(100.0, &rows, &facts, &catalog);

        for row in &mut rows {
            row.weight_grams *= 3.0;
        }
        let after = aggregate(100.0, &rows, &facts, &catalog);

        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.per_100g, a.per_100g);
            assert_eq!(b.per_serving, a.per_serving);
            assert_eq!(b.percent_dv, a.percent_dv);
        }
    }

    #[test]
    fn percent_dv_defined_iff_daily_value_set() {
        let cat = category("Fat Breakdown", 3);
        let with_dv = nutrient("Saturated Fat", "g", Some(22.0), &cat, 1);
        let without_dv = nutrient("Monounsaturated Fat", "g", None, &cat, 3);
        let zero_dv = nutrient("Polyunsaturated Fat", "g", Some(0.0), &cat, 4);
        let ids = [with_dv.id, without_dv.id, zero_dv.id];

        let r = row("Ghee", 50.0);
        let facts = HashMap::from([(
            r.ingredient.id,
            ids.iter().map(|&nid| fact(r.ingredient.id, nid, 10.0)).collect(),
        )]);
        let catalog = HashMap::from([
            (with_dv.id, with_dv),
            (without_dv.id, without_dv),
            (zero_dv.id, zero_dv),
        ]);

        let results = aggregate(100.0, &[r], &facts, &catalog);
        for result in results {
            match result.nutrient.name.as_str() {
                "Saturated Fat" => assert!(result.percent_dv.is_some()),
                _ => assert_eq!(result.percent_dv, None),
            }
        }
    }

    #[test]
    fn empty_recipe_yields_empty_result() {
        let results = aggregate(100.0, &[], &HashMap::new(), &HashMap::new());
        assert!(results.is_empty());
    }

    #[test]
    fn zero_weight_falls_back_without_dividing_by_zero() {
        // Rows cannot normally carry zero weight, but the aggregator must
        // stay total if handed a degenerate snapshot.
        let cat = category("Energy", 1);
        let energy = nutrient("Energy", "kcal", Some(2000.0), &cat, 1);
        let energy_id = energy.id;
        let r = row("Air", 0.0);
        let facts = HashMap::from([(r.ingredient.id, vec![fact(r.ingredient.id, energy_id, 500.0)])]);
        let catalog = HashMap::from([(energy_id, energy)]);

        let results = aggregate(100.0, &[r], &facts, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].total_value, 0.0);
        assert_eq!(results[0].per_100g, 0.0);
        assert!(results[0].per_100g.is_finite());
    }

    #[test]
    fn orphaned_nutrient_fact_is_skipped() {
        let cat = category("Energy", 1);
        let energy = nutrient("Energy", "kcal", Some(2000.0), &cat, 1);
        let energy_id = energy.id;
        let r = row("Rice", 100.0);
        let facts = HashMap::from([(
            r.ingredient.id,
            vec![
                fact(r.ingredient.id, energy_id, 345.0),
                // References a nutrient deleted from the catalog.
                fact(r.ingredient.id, Uuid::new_v4(), 12.0),
            ],
        )]);
        let catalog = HashMap::from([(energy_id, energy)]);

        let results = aggregate(100.0, &[r], &facts, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nutrient.name, "Energy");
    }

    #[test]
    fn results_sorted_by_display_order_not_insertion() {
        let (rows, facts, catalog, _, _) = rice_and_salt();
        let results = aggregate(100.0, &rows, &facts, &catalog);
        // Energy category (order 1) sorts ahead of Minerals (order 5)
        // regardless of accumulation order.
        assert_eq!(results[0].nutrient.name, "Energy");
        assert_eq!(results[1].nutrient.name, "Sodium");
    }

    #[test]
    fn ingredient_without_facts_contributes_nothing() {
        let (mut rows, facts, catalog, _, _) = rice_and_salt();
        rows.push(row("Water", 500.0));
        let results = aggregate(100.0, &rows, &facts, &catalog);
        assert_eq!(results.len(), 2);
        // Water still dilutes the per-100g values through total weight.
        let energy = results.iter().find(|r| r.nutrient.name == "Energy").unwrap();
        assert_eq!(energy.per_100g, round2(345.0 / 605.0 * 100.0));
    }
}
