use axum::extract::{Query, State};
use nutrilabel_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::SearchIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::SearchIngredientsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredient",
    summary = "Search master ingredients by name or alias",
    params(SearchIngredientsParams),
    responses(
        (status = 200, body = SearchIngredientsResponse)
    )
)]
pub async fn search_ingredients(
    Query(params): Query<SearchIngredientsParams>,
    State(state): State<AppState>,
) -> Result<Response<SearchIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .search_ingredients(SearchIngredientsInput {
            query: params.q,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchIngredientsResponse { data: ingredients }))
}
