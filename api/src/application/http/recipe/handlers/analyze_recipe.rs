use axum::extract::{Path, State};
use nutrilabel_core::domain::labeling::{entities::LabelAnalysis, ports::LabelingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRecipeResponse {
    pub data: LabelAnalysis,
}

#[utoipa::path(
    post,
    path = "/recipes/{recipe_id}/analyze",
    tag = "labeling",
    summary = "Run the full label analysis for a recipe",
    description = "Aggregates nutrition, classifies front-of-pack indicators, runs the FSSAI \
                   compliance battery and allergen detection, and records a new recipe version. \
                   A non-compliant recipe still returns 200; findings are part of the payload.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = AnalyzeRecipeResponse)
    )
)]
pub async fn analyze_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AnalyzeRecipeResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeRecipeResponse { data: analysis }))
}
