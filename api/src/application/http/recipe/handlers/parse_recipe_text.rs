use axum::extract::State;
use nutrilabel_core::domain::{
    ai::ports::RecipeAiService,
    ingredient::{ports::IngredientService, value_objects::IngredientMatch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::ParseRecipeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedIngredientRow {
    pub name: String,
    pub weight_grams: f64,
    /// Best database candidate for the parsed name, if any.
    pub matched: Option<IngredientMatch>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParseRecipeTextResponse {
    pub data: Vec<ParsedIngredientRow>,
}

#[utoipa::path(
    post,
    path = "/recipes/parse",
    tag = "recipe",
    summary = "Parse free recipe text into weighted ingredients",
    description = "Extracts `{name, weight_grams}` rows from free text (language model with a \
                   regex fallback) and matches each row against the master ingredient list.",
    responses(
        (status = 200, body = ParseRecipeTextResponse)
    ),
    request_body = ParseRecipeTextRequest
)]
pub async fn parse_recipe_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseRecipeTextRequest>,
) -> Result<Response<ParseRecipeTextResponse>, ApiError> {
    let parsed = state
        .service
        .parse_recipe_text(payload.text)
        .await
        .map_err(ApiError::from)?;

    let mut data = Vec::with_capacity(parsed.len());
    for item in parsed {
        let matched = state
            .service
            .match_ingredient(item.name.clone())
            .await
            .map_err(ApiError::from)?;

        data.push(ParsedIngredientRow {
            name: item.name,
            weight_grams: item.weight_grams,
            matched,
        });
    }

    Ok(Response::OK(ParseRecipeTextResponse { data }))
}
