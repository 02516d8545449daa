use axum::extract::{Path, State};
use nutrilabel_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Delete a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 204)
    )
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
