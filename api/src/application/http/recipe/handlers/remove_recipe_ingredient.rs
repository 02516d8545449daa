use axum::extract::{Path, State};
use nutrilabel_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}/ingredients/{ingredient_id}",
    tag = "recipe",
    summary = "Remove an ingredient from a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 204)
    )
)]
pub async fn remove_recipe_ingredient(
    Path((recipe_id, ingredient_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .remove_recipe_ingredient(recipe_id, ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
