use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientsParams {
    /// Substring matched against ingredient names and aliases.
    #[schema(example = "flour")]
    pub q: String,
    #[schema(example = 20)]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct MatchIngredientRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,
}
