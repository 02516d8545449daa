use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A structured ingredient extracted from free recipe text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedIngredient {
    pub name: String,
    pub weight_grams: f64,
}
