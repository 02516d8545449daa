use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Display grouping for nutrients (Energy, Macronutrients, Minerals, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutrientCategory {
    pub id: Uuid,
    pub name: String,
    pub display_order: i32,
}

/// An entry of the immutable nutrient reference catalog.
///
/// `daily_value` is `None` for nutrients without a recommended daily
/// intake; the percent-DV for such nutrients is undefined, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrient {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
    pub category: NutrientCategory,
    pub daily_value: Option<f64>,
    pub display_order: i32,
    pub is_mandatory: bool,
}
