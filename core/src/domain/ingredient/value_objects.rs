use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::Ingredient;

#[derive(Debug, Clone)]
pub struct SearchIngredientsInput {
    pub query: String,
    pub limit: Option<u64>,
}

/// Result of matching a free-text ingredient name against the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    pub ingredient: Ingredient,
    /// 1.0 exact, 0.95 alias, 0.7 partial, 0.5 word, 0.4 alias overlap.
    pub confidence: f64,
}
