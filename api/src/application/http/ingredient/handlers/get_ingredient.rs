use axum::extract::{Path, State};
use nutrilabel_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}",
    tag = "ingredient",
    summary = "Get a master ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse)
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient(ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientResponse { data: ingredient }))
}
