use axum::extract::{Path, State};
use nutrilabel_core::domain::labeling::{entities::ReformulationReport, ports::LabelingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReformulateRecipeResponse {
    pub data: ReformulationReport,
}

#[utoipa::path(
    post,
    path = "/recipes/{recipe_id}/reformulate",
    tag = "labeling",
    summary = "Explain and advise on FOP-high nutrients",
    description = "Ranks each ingredient's contribution to every nutrient classified HIGH and \
                   attaches model-generated substitution advice when available.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = ReformulateRecipeResponse)
    )
)]
pub async fn reformulate_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ReformulateRecipeResponse>, ApiError> {
    let report = state
        .service
        .reformulate_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReformulateRecipeResponse { data: report }))
}
