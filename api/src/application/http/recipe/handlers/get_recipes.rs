use axum::extract::{Query, State};
use nutrilabel_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::ListRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GetRecipesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipe",
    summary = "List recipes",
    params(GetRecipesParams),
    responses(
        (status = 200, body = GetRecipesResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(params): Query<GetRecipesParams>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(ListRecipesInput {
            offset: params.offset,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
