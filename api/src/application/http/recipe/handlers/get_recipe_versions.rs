use axum::extract::{Path, Query, State};
use chrono::{DateTime, Utc};
use nutrilabel_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recipe::validators::GetRecipeVersionsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

const DEFAULT_VERSIONS_LIMIT: u64 = 20;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeVersionSummary {
    pub version_number: i32,
    pub is_compliant: bool,
    pub change_summary: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeVersionsResponse {
    pub data: Vec<RecipeVersionSummary>,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/versions",
    tag = "recipe",
    summary = "List analysis versions of a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
        GetRecipeVersionsParams,
    ),
    responses(
        (status = 200, body = GetRecipeVersionsResponse)
    )
)]
pub async fn get_recipe_versions(
    Path(recipe_id): Path<Uuid>,
    Query(params): Query<GetRecipeVersionsParams>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeVersionsResponse>, ApiError> {
    let versions = state
        .service
        .get_recipe_versions(recipe_id, params.limit.unwrap_or(DEFAULT_VERSIONS_LIMIT))
        .await
        .map_err(ApiError::from)?;

    let data = versions
        .into_iter()
        .map(|v| RecipeVersionSummary {
            version_number: v.version_number,
            is_compliant: v.is_compliant,
            change_summary: v.change_summary,
            created_at: v.created_at,
        })
        .collect();

    Ok(Response::OK(GetRecipeVersionsResponse { data }))
}
