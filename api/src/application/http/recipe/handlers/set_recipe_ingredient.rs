use axum::extract::{Path, State};
use nutrilabel_core::domain::recipe::{
    entities::RecipeIngredient, ports::RecipeService, value_objects::SetRecipeIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::SetRecipeIngredientRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetRecipeIngredientResponse {
    pub data: Vec<RecipeIngredient>,
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}/ingredients",
    tag = "recipe",
    summary = "Add an ingredient to a recipe or replace its weight",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = SetRecipeIngredientResponse)
    ),
    request_body = SetRecipeIngredientRequest
)]
pub async fn set_recipe_ingredient(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetRecipeIngredientRequest>,
) -> Result<Response<SetRecipeIngredientResponse>, ApiError> {
    state
        .service
        .set_recipe_ingredient(SetRecipeIngredientInput {
            recipe_id,
            ingredient_id: payload.ingredient_id,
            weight_grams: payload.weight_grams,
        })
        .await
        .map_err(ApiError::from)?;

    let ingredients = state
        .service
        .get_recipe_ingredients(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SetRecipeIngredientResponse { data: ingredients }))
}
