use serde_json::json;

use crate::domain::{
    allergen::entities::AllergenReport,
    labeling::entities::{ComplianceReport, FopIndicator, NutrientAttribution, NutrientResult},
    recipe::entities::Recipe,
};

/// Version numbers are sequential per recipe and start at 1.
pub fn next_version_number(latest: Option<i32>) -> i32 {
    latest.map_or(1, |n| n + 1)
}

/// Full recipe + nutrition + compliance snapshot stored on each version.
pub fn build_version_snapshot(
    recipe: &Recipe,
    total_weight: f64,
    nutrition: &[NutrientResult],
    compliance: &ComplianceReport,
    fop_indicators: &[FopIndicator],
    allergens: &AllergenReport,
    ingredient_list: &str,
) -> serde_json::Value {
    json!({
        "recipe": recipe,
        "total_weight": total_weight,
        "nutrition": nutrition,
        "compliance": compliance,
        "fop_indicators": fop_indicators,
        "allergens": allergens,
        "ingredient_list": ingredient_list,
        "timestamp": recipe.updated_at,
    })
}

/// Prompt for the fail-soft reformulation advice call.
pub fn build_reformulation_prompt(recipe: &Recipe, attribution: &[NutrientAttribution]) -> String {
    let mut lines = vec![
        "You are an FSSAI food labelling compliance expert.".to_string(),
        String::new(),
        format!("Product: {}", recipe.name),
        format!("Brand: {}", recipe.brand_name),
        format!(
            "Serving Size: {}{}",
            recipe.serving_size, recipe.serving_unit
        ),
        String::new(),
        "Nutrients exceeding front-of-pack thresholds:".to_string(),
    ];

    for attr in attribution {
        lines.push(format!(
            "  - {}: {}{}/100g (threshold {}{}/100g)",
            attr.nutrient, attr.current_per_100g, attr.unit, attr.threshold, attr.unit
        ));
        lines.push("    Top contributing ingredients:".to_string());
        for c in attr.top_contributors.iter().take(3) {
            lines.push(format!(
                "      - {} ({}g in recipe) contributes {}{}/100g recipe ({}% of total)",
                c.ingredient, c.weight_grams, c.contribution_per_100g, attr.unit, c.pct_of_total
            ));
        }
    }

    lines.push(String::new());
    lines.push(
        "Suggest ingredient substitutions that reduce the offending nutrients while keeping \
         the product recognizable. Return a JSON object with:"
            .to_string(),
    );
    lines.push("  \"summary\": \"brief reformulation summary\",".to_string());
    lines.push(
        "  \"suggestions\": [{\"ingredient\": \"...\", \"replace_with\": \"...\", \"reason\": \"...\"}]"
            .to_string(),
    );
    lines.push("Return ONLY the JSON, no other text.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::labeling::entities::IngredientContribution;

    #[test]
    fn version_numbers_start_at_one_and_increment() {
        assert_eq!(next_version_number(None), 1);
        assert_eq!(next_version_number(Some(1)), 2);
        assert_eq!(next_version_number(Some(41)), 42);
    }

    #[test]
    fn snapshot_contains_every_section() {
        let recipe = Recipe::new(
            "Test".to_string(),
            String::new(),
            100.0,
            "g".to_string(),
            1.0,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            None,
        );
        let compliance = ComplianceReport {
            is_compliant: true,
            issues: vec![],
            warnings: vec![],
            info: vec![],
            formatted_notes: String::new(),
        };
        let allergens = AllergenReport {
            detected: vec![],
            details: Default::default(),
            allergen_string: "No known allergens".to_string(),
        };

        let snapshot =
            build_version_snapshot(&recipe, 105.0, &[], &compliance, &[], &allergens, "Rice (100g)");

        assert_eq!(snapshot["total_weight"], 105.0);
        assert_eq!(snapshot["ingredient_list"], "Rice (100g)");
        assert!(snapshot["recipe"]["id"].is_string());
        assert!(snapshot["compliance"]["is_compliant"].as_bool().unwrap());
    }

    #[test]
    fn reformulation_prompt_lists_top_three_contributors() {
        let recipe = Recipe::new(
            "Namkeen".to_string(),
            String::new(),
            30.0,
            "g".to_string(),
            10.0,
            "Brand".to_string(),
            String::new(),
            String::new(),
            String::new(),
            None,
        );
        let attribution = vec![NutrientAttribution {
            nutrient: "Sodium".to_string(),
            current_per_100g: 900.0,
            threshold: 600.0,
            unit: "mg".to_string(),
            top_contributors: (1..=5)
                .map(|i| IngredientContribution {
                    ingredient: format!("Ing {i}"),
                    weight_grams: 10.0,
                    contribution_abs: 100.0,
                    contribution_per_100g: 50.0,
                    pct_of_total: 20.0,
                })
                .collect(),
        }];

        let prompt = build_reformulation_prompt(&recipe, &attribution);
        assert!(prompt.contains("Sodium: 900mg/100g"));
        assert!(prompt.contains("Ing 3"));
        assert!(!prompt.contains("Ing 4"));
    }
}
