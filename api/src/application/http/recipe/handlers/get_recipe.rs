use axum::extract::{Path, State};
use nutrilabel_core::domain::recipe::{
    entities::{Recipe, RecipeIngredient},
    ports::RecipeService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeResponse {
    pub data: Recipe,
    pub ingredients: Vec<RecipeIngredient>,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Get a recipe with its ingredient rows",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse)
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    let ingredients = state
        .service
        .get_recipe_ingredients(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse {
        data: recipe,
        ingredients,
    }))
}
