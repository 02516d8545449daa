use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Allergen groups detected from a recipe's ingredient names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenReport {
    /// Detected group names, sorted.
    pub detected: Vec<String>,
    /// Group name to the ingredient names that triggered it, sorted.
    pub details: BTreeMap<String, Vec<String>>,
    /// Label-format declaration, e.g. "Contains: Milk / Dairy, Soy".
    pub allergen_string: String,
}
