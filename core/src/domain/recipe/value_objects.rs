use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub name: String,
    pub description: String,
    pub serving_size: f64,
    pub serving_unit: String,
    pub servings_per_pack: f64,
    pub brand_name: String,
    pub manufacturer: String,
    pub fssai_license: String,
    pub allergen_info: String,
    pub owner: Option<Uuid>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub serving_size: Option<f64>,
    pub serving_unit: Option<String>,
    pub servings_per_pack: Option<f64>,
    pub brand_name: Option<String>,
    pub manufacturer: Option<String>,
    pub fssai_license: Option<String>,
    pub allergen_info: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SetRecipeIngredientInput {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub weight_grams: f64,
}

#[derive(Debug, Clone)]
pub struct ListRecipesInput {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}
