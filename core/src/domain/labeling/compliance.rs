use std::collections::HashSet;

use crate::domain::{
    common::round1,
    labeling::{
        aggregator::per_100g_by_name,
        entities::{ComplianceReport, NutrientResult},
        fop::FOP_CHECKS,
    },
    recipe::entities::{Recipe, RecipeIngredient},
};

/// Nutrients that must appear on every label under FSSAI regulations.
pub const MANDATORY_NUTRIENTS: [&str; 10] = [
    "Energy",
    "Total Fat",
    "Saturated Fat",
    "Trans Fat",
    "Total Carbohydrate",
    "Total Sugars",
    "Added Sugars",
    "Protein",
    "Sodium",
    "Dietary Fibre",
];

/// Industrial trans fat should not exceed this share of total fat.
const TRANS_FAT_MAX_PCT: f64 = 2.0;

/// Validates a recipe and its aggregated nutrition against the FSSAI rule
/// battery. Accumulates findings within one invocation and is cheap to
/// reconstruct per call; every rule runs, none short-circuits.
pub struct ComplianceChecker<'a> {
    recipe: &'a Recipe,
    ingredient_rows: &'a [RecipeIngredient],
    nutrition: &'a [NutrientResult],
    issues: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(
        recipe: &'a Recipe,
        ingredient_rows: &'a [RecipeIngredient],
        nutrition: &'a [NutrientResult],
    ) -> Self {
        Self {
            recipe,
            ingredient_rows,
            nutrition,
            issues: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
        }
    }

    /// Run every check and return the categorized findings.
    /// The verdict is compliant exactly when no issue was raised.
    pub fn check_all(mut self) -> ComplianceReport {
        self.check_mandatory_nutrients();
        self.check_serving_size_declaration();
        self.check_fop_warnings();
        self.check_ingredient_list();
        self.check_allergen_declaration();
        self.check_fssai_license();
        self.check_trans_fat();

        let is_compliant = self.issues.is_empty();
        let formatted_notes = self.format_notes();

        ComplianceReport {
            is_compliant,
            issues: self.issues,
            warnings: self.warnings,
            info: self.info,
            formatted_notes,
        }
    }

    fn check_mandatory_nutrients(&mut self) {
        let present: HashSet<&str> = self
            .nutrition
            .iter()
            .map(|r| r.nutrient.name.as_str())
            .collect();

        for name in MANDATORY_NUTRIENTS {
            if !present.contains(name) {
                self.issues.push(format!(
                    "MISSING MANDATORY NUTRIENT: '{name}' is required by FSSAI \
                     regulations but is not present in the nutrition data."
                ));
            }
        }
    }

    fn check_serving_size_declaration(&mut self) {
        if self.recipe.serving_size <= 0.0 {
            self.issues
                .push("SERVING SIZE: Must be declared as per FSSAI regulations.".to_string());
        }
        if self.recipe.serving_unit.trim().is_empty() {
            self.issues
                .push("SERVING UNIT: Must specify unit (g/ml) for serving size.".to_string());
        }
        if self.recipe.servings_per_pack <= 0.0 {
            self.warnings.push(
                "SERVINGS PER PACK: Should declare number of servings per package.".to_string(),
            );
        }
    }

    fn check_fop_warnings(&mut self) {
        let per_100g = per_100g_by_name(self.nutrition);

        for (name, threshold, unit) in FOP_CHECKS {
            let value = per_100g.get(name).copied().unwrap_or(0.0);
            if value > threshold {
                let label = match name {
                    "Total Fat" => "HIGH IN FAT",
                    "Saturated Fat" => "HIGH IN SATURATED FAT",
                    "Total Sugars" => "HIGH IN SUGAR",
                    _ => "HIGH IN SODIUM/SALT",
                };
                self.warnings.push(format!(
                    "{label}: {value}{unit}/100g exceeds threshold \
                     ({threshold}{unit}/100g). FOP warning label '{label}' required."
                ));
            }
        }
    }

    fn check_ingredient_list(&mut self) {
        if self.ingredient_rows.is_empty() {
            self.issues.push(
                "INGREDIENT LIST: Recipe must have at least one ingredient. FSSAI \
                 requires full ingredient list in descending order of weight."
                    .to_string(),
            );
        } else {
            self.info.push(format!(
                "INGREDIENT LIST: {} ingredients declared. Listed in descending \
                 order of composition by weight as required.",
                self.ingredient_rows.len()
            ));
        }
    }

    fn check_allergen_declaration(&mut self) {
        if self.recipe.allergen_info.trim().is_empty() {
            self.warnings.push(
                "ALLERGEN DECLARATION: No allergen information provided. FSSAI \
                 requires declaration of common allergens (milk, nuts, gluten, soy, \
                 eggs, fish, crustaceans, etc.) if present."
                    .to_string(),
            );
        } else {
            self.info.push("ALLERGEN DECLARATION: Provided.".to_string());
        }
    }

    fn check_fssai_license(&mut self) {
        let lic = self.recipe.fssai_license.trim();
        if lic.is_empty() {
            self.warnings.push(
                "FSSAI LICENSE: No FSSAI license number provided. Required on all \
                 packaged food products."
                    .to_string(),
            );
        } else if lic.len() != 14 || !lic.chars().all(|c| c.is_ascii_digit()) {
            self.warnings.push(format!(
                "FSSAI LICENSE: '{lic}' may not be valid. FSSAI license numbers are \
                 typically 14 digits."
            ));
        } else {
            self.info
                .push(format!("FSSAI LICENSE: {lic} (format valid)."));
        }
    }

    /// Only the first Trans Fat entry is examined; the data model keys
    /// nutrition by nutrient, so a second entry cannot occur in practice.
    fn check_trans_fat(&mut self) {
        for result in self.nutrition {
            if result.nutrient.name == "Trans Fat" {
                let trans = result.per_100g;
                let total_fat = self
                    .nutrition
                    .iter()
                    .find(|r| r.nutrient.name == "Total Fat")
                    .map(|r| r.per_100g)
                    .unwrap_or(0.0);

                if total_fat > 0.0 && trans > 0.0 {
                    let trans_pct = (trans / total_fat) * 100.0;
                    if trans_pct > TRANS_FAT_MAX_PCT {
                        self.warnings.push(format!(
                            "TRANS FAT: {trans}g/100g ({:.1}% of total fat). FSSAI \
                             sets a limit on industrial trans fat.",
                            round1(trans_pct)
                        ));
                    }
                }
                return;
            }
        }
    }

    fn format_notes(&self) -> String {
        let mut lines = Vec::new();

        if !self.issues.is_empty() {
            lines.push("=== COMPLIANCE ISSUES (Must Fix) ===".to_string());
            for (i, issue) in self.issues.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, issue));
            }
        }
        if !self.warnings.is_empty() {
            lines.push("\n=== WARNINGS (Recommended) ===".to_string());
            for (i, warning) in self.warnings.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, warning));
            }
        }
        if !self.info.is_empty() {
            lines.push("\n=== INFO ===".to_string());
            for (i, info) in self.info.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, info));
            }
        }
        if self.issues.is_empty() && self.warnings.is_empty() {
            lines.push("All FSSAI compliance checks passed.".to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ingredient::entities::Ingredient,
        nutrient::entities::{Nutrient, NutrientCategory},
    };
    use uuid::Uuid;

    fn recipe() -> Recipe {
        Recipe::new(
            "Masala Mix".to_string(),
            String::new(),
            100.0,
            "g".to_string(),
            4.0,
            "TestBrand".to_string(),
            "Test Foods Pvt Ltd".to_string(),
            "12345678901234".to_string(),
            "Contains: Milk / Dairy".to_string(),
            None,
        )
    }

    fn rows(count: usize) -> Vec<RecipeIngredient> {
        (0..count)
            .map(|i| RecipeIngredient {
                recipe_id: Uuid::nil(),
                ingredient: Ingredient {
                    id: Uuid::new_v4(),
                    name: format!("Ingredient {i}"),
                    category: None,
                    aliases: String::new(),
                    description: String::new(),
                },
                weight_grams: 10.0,
            })
            .collect()
    }

    fn result(name: &str, per_100g: f64) -> NutrientResult {
        NutrientResult {
            nutrient: Nutrient {
                id: Uuid::new_v4(),
                name: name.to_string(),
                unit: "g".to_string(),
                category: NutrientCategory {
                    id: Uuid::new_v4(),
                    name: "Macronutrients".to_string(),
                    display_order: 2,
                },
                daily_value: Some(50.0),
                display_order: 1,
                is_mandatory: true,
            },
            total_value: per_100g,
            per_serving: per_100g,
            per_100g,
            percent_dv: Some(1.0),
        }
    }

    fn full_nutrition() -> Vec<NutrientResult> {
        MANDATORY_NUTRIENTS
            .iter()
            // Zero trans fat keeps the ratio rule quiet in the baseline.
            .map(|name| result(name, if *name == "Trans Fat" { 0.0 } else { 1.0 }))
            .collect()
    }

    #[test]
    fn fully_declared_recipe_is_compliant() {
        let recipe = recipe();
        let rows = rows(3);
        let nutrition = full_nutrition();
        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();

        assert!(report.is_compliant);
        assert!(report.issues.is_empty());
        assert!(report.warnings.is_empty());
        // License, allergens and ingredient list each leave an info note.
        assert_eq!(report.info.len(), 3);
    }

    #[test]
    fn missing_mandatory_nutrients_block_compliance() {
        let recipe = recipe();
        let rows = rows(2);
        let nutrition: Vec<NutrientResult> = full_nutrition()
            .into_iter()
            .filter(|r| {
                !matches!(
                    r.nutrient.name.as_str(),
                    "Trans Fat" | "Added Sugars" | "Dietary Fibre"
                )
            })
            .collect();

        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert!(!report.is_compliant);
        let missing: Vec<&String> = report
            .issues
            .iter()
            .filter(|i| i.starts_with("MISSING MANDATORY NUTRIENT"))
            .collect();
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn empty_recipe_reports_all_mandatory_and_ingredient_issues() {
        let recipe = recipe();
        let report = ComplianceChecker::new(&recipe, &[], &[]).check_all();

        assert!(!report.is_compliant);
        assert_eq!(report.issues.len(), 11);
        assert!(report.issues.iter().any(|i| i.starts_with("INGREDIENT LIST")));
    }

    #[test]
    fn serving_declaration_rules() {
        let mut recipe = recipe();
        recipe.serving_size = 0.0;
        recipe.serving_unit = String::new();
        recipe.servings_per_pack = 0.0;

        let rows = rows(1);
        let nutrition = full_nutrition();
        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();

        assert!(report.issues.iter().any(|i| i.starts_with("SERVING SIZE")));
        assert!(report.issues.iter().any(|i| i.starts_with("SERVING UNIT")));
        // Missing servings-per-pack is advisory only.
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("SERVINGS PER PACK"))
        );
    }

    #[test]
    fn fop_warnings_do_not_block_compliance() {
        let recipe = recipe();
        let rows = rows(1);
        let mut nutrition = full_nutrition();
        for r in &mut nutrition {
            if r.nutrient.name == "Sodium" {
                r.per_100g = 1845.62;
            }
        }

        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert!(report.is_compliant);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("HIGH IN SODIUM/SALT"))
        );
    }

    #[test]
    fn license_format_scenarios() {
        let rows = rows(1);
        let nutrition = full_nutrition();

        let mut short = recipe();
        short.fssai_license = "123".to_string();
        let report = ComplianceChecker::new(&short, &rows, &nutrition).check_all();
        assert!(report.warnings.iter().any(|w| w.contains("'123' may not be valid")));

        let mut valid = recipe();
        valid.fssai_license = "12345678901234".to_string();
        let report = ComplianceChecker::new(&valid, &rows, &nutrition).check_all();
        assert!(!report.warnings.iter().any(|w| w.starts_with("FSSAI LICENSE")));
        assert!(report.info.iter().any(|i| i.contains("format valid")));

        let mut blank = recipe();
        blank.fssai_license = String::new();
        let report = ComplianceChecker::new(&blank, &rows, &nutrition).check_all();
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("No FSSAI license number provided"))
        );
    }

    #[test]
    fn trans_fat_ratio_warning() {
        let recipe = recipe();
        let rows = rows(1);
        let mut nutrition = full_nutrition();
        for r in &mut nutrition {
            match r.nutrient.name.as_str() {
                "Total Fat" => r.per_100g = 10.0,
                "Trans Fat" => r.per_100g = 0.5,
                _ => {}
            }
        }

        // 0.5 of 10.0 is 5% of total fat, above the 2% limit.
        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert!(report.warnings.iter().any(|w| w.starts_with("TRANS FAT")));
        assert!(report.is_compliant);
    }

    #[test]
    fn trans_fat_scan_stops_at_first_entry() {
        let recipe = recipe();
        let rows = rows(1);
        let mut nutrition = full_nutrition();
        for r in &mut nutrition {
            match r.nutrient.name.as_str() {
                "Total Fat" => r.per_100g = 10.0,
                "Trans Fat" => r.per_100g = 0.0,
                _ => {}
            }
        }
        // A duplicate entry cannot occur through aggregation; feed one
        // directly to pin the first-match-wins behavior.
        nutrition.push(result("Trans Fat", 5.0));

        let report = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert!(!report.warnings.iter().any(|w| w.starts_with("TRANS FAT")));
    }

    #[test]
    fn checker_is_idempotent() {
        let recipe = recipe();
        let rows = rows(2);
        let nutrition = full_nutrition();

        let first = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        let second = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert_eq!(first, second);
    }

    #[test]
    fn formatted_notes_sections() {
        let recipe = recipe();
        let report = ComplianceChecker::new(&recipe, &[], &[]).check_all();
        assert!(report.formatted_notes.contains("=== COMPLIANCE ISSUES (Must Fix) ==="));
        assert!(report.formatted_notes.contains("  1. "));

        let rows = rows(1);
        let nutrition = full_nutrition();
        let clean = ComplianceChecker::new(&recipe, &rows, &nutrition).check_all();
        assert!(clean.formatted_notes.contains("All FSSAI compliance checks passed."));
        assert!(!clean.formatted_notes.contains("=== WARNINGS"));
    }
}
