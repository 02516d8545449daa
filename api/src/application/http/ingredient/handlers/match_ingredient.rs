use axum::extract::State;
use nutrilabel_core::domain::ingredient::{
    ports::IngredientService, value_objects::IngredientMatch,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::MatchIngredientRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchIngredientResponse {
    /// `None` when no database candidate is plausible.
    pub data: Option<IngredientMatch>,
}

#[utoipa::path(
    post,
    path = "/ingredients/match",
    tag = "ingredient",
    summary = "Match a free-text name against the master ingredient list",
    responses(
        (status = 200, body = MatchIngredientResponse)
    ),
    request_body = MatchIngredientRequest
)]
pub async fn match_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MatchIngredientRequest>,
) -> Result<Response<MatchIngredientResponse>, ApiError> {
    let matched = state
        .service
        .match_ingredient(payload.name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MatchIngredientResponse { data: matched }))
}
