use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 300,
        message = "name must be between 1 and 300 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Serving size amount, in `serving_unit`.
    #[validate(range(min = 0.1, message = "serving_size must be positive"))]
    pub serving_size: f64,

    /// One of "g", "ml" or "piece".
    pub serving_unit: String,

    #[validate(range(min = 0.1, message = "servings_per_pack must be positive"))]
    pub servings_per_pack: f64,

    #[serde(default)]
    pub brand_name: String,

    #[serde(default)]
    pub manufacturer: String,

    #[serde(default)]
    pub fssai_license: String,

    #[serde(default)]
    pub allergen_info: String,

    pub owner: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 300,
        message = "name must be between 1 and 300 characters"
    ))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.1, message = "serving_size must be positive"))]
    pub serving_size: Option<f64>,

    pub serving_unit: Option<String>,

    #[validate(range(min = 0.1, message = "servings_per_pack must be positive"))]
    pub servings_per_pack: Option<f64>,

    pub brand_name: Option<String>,

    pub manufacturer: Option<String>,

    pub fssai_license: Option<String>,

    pub allergen_info: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetRecipeIngredientRequest {
    pub ingredient_id: Uuid,

    /// Weight of the ingredient in grams; replaces any existing row for
    /// the same ingredient.
    #[validate(range(min = 0.01, message = "weight_grams must be positive"))]
    pub weight_grams: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ParseRecipeTextRequest {
    #[validate(length(
        min = 1,
        max = 10000,
        message = "text must be between 1 and 10000 characters"
    ))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    #[schema(example = 0)]
    pub offset: Option<u64>,
    #[schema(example = 20)]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetRecipeVersionsParams {
    #[schema(example = 20)]
    pub limit: Option<u64>,
}
