use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{allergen::AllergenReport, nutrient::entities::Nutrient, recipe::entities::Recipe};

/// Aggregated amounts for one nutrient across a whole recipe.
///
/// `percent_dv` is present only when the nutrient declares a non-zero
/// daily value; it is never reported as zero in place of "undefined".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientResult {
    pub nutrient: Nutrient,
    pub total_value: f64,
    pub per_serving: f64,
    pub per_100g: f64,
    pub percent_dv: Option<f64>,
}

/// Front-of-pack traffic-light tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FopLevel {
    Low,
    Medium,
    High,
}

impl FopLevel {
    pub fn color(&self) -> &'static str {
        match self {
            FopLevel::Low => "green",
            FopLevel::Medium => "amber",
            FopLevel::High => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FopIndicator {
    pub nutrient: String,
    pub value: f64,
    pub unit: String,
    pub level: FopLevel,
    pub color: String,
}

/// Categorized findings of the compliance rule battery.
/// `is_compliant` holds exactly when `issues` is empty; warnings and info
/// never affect the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceReport {
    pub is_compliant: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
    pub formatted_notes: String,
}

/// One ingredient's share of a nutrient total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientContribution {
    pub ingredient: String,
    pub weight_grams: f64,
    /// Absolute amount contributed to the recipe, in the nutrient's unit.
    pub contribution_abs: f64,
    /// Contribution normalized to 100g of finished recipe.
    pub contribution_per_100g: f64,
    /// Percentage share of the nutrient's recipe total.
    pub pct_of_total: f64,
}

/// Ranked per-ingredient breakdown explaining a high nutrient value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientAttribution {
    pub nutrient: String,
    pub current_per_100g: f64,
    pub threshold: f64,
    pub unit: String,
    pub top_contributors: Vec<IngredientContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReformulationSuggestion {
    pub ingredient: String,
    pub replace_with: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReformulationReport {
    pub needs_reformulation: bool,
    pub attribution: Vec<NutrientAttribution>,
    pub suggestions: Vec<ReformulationSuggestion>,
    pub summary: String,
    /// False when the advisory call failed soft and only the deterministic
    /// attribution is available.
    pub ai_powered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    pub number: i32,
    pub created_at: DateTime<Utc>,
}

/// Full computed state for one recipe: everything label renderers and API
/// serializers consume. Valid only for the ingredient-list snapshot it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelAnalysis {
    pub recipe: Recipe,
    pub total_weight: f64,
    pub nutrition: Vec<NutrientResult>,
    pub compliance: ComplianceReport,
    pub fop_indicators: Vec<FopIndicator>,
    pub allergens: AllergenReport,
    pub ingredient_list: String,
    pub version: VersionInfo,
}
