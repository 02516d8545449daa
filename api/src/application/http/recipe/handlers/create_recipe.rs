use axum::extract::State;
use nutrilabel_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::CreateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Create a recipe",
    responses(
        (status = 201, body = CreateRecipeResponse)
    ),
    request_body = CreateRecipeRequest
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRecipeRequest>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(CreateRecipeInput {
            name: payload.name,
            description: payload.description,
            serving_size: payload.serving_size,
            serving_unit: payload.serving_unit,
            servings_per_pack: payload.servings_per_pack,
            brand_name: payload.brand_name,
            manufacturer: payload.manufacturer,
            fssai_license: payload.fssai_license,
            allergen_info: payload.allergen_info,
            owner: payload.owner,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
