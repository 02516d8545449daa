use axum::extract::{Path, State};
use nutrilabel_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::UpdateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::UpdateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe metadata",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = UpdateRecipeResponse)
    ),
    request_body = UpdateRecipeRequest
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateRecipeRequest>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(
            recipe_id,
            UpdateRecipeInput {
                name: payload.name,
                description: payload.description,
                serving_size: payload.serving_size,
                serving_unit: payload.serving_unit,
                servings_per_pack: payload.servings_per_pack,
                brand_name: payload.brand_name,
                manufacturer: payload.manufacturer,
                fssai_license: payload.fssai_license,
                allergen_info: payload.allergen_info,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
