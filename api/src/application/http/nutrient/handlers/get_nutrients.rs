use axum::extract::State;
use nutrilabel_core::domain::nutrient::{entities::Nutrient, ports::NutrientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutrientsResponse {
    pub data: Vec<Nutrient>,
}

#[utoipa::path(
    get,
    path = "/nutrients",
    tag = "nutrient",
    summary = "List the nutrient reference catalog",
    description = "Ordered by category display order then nutrient display order.",
    responses(
        (status = 200, body = GetNutrientsResponse)
    )
)]
pub async fn get_nutrients(
    State(state): State<AppState>,
) -> Result<Response<GetNutrientsResponse>, ApiError> {
    let nutrients = state
        .service
        .list_nutrients()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNutrientsResponse { data: nutrients }))
}
