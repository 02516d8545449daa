use axum::extract::State;
use nutrilabel_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetReadinessResponse {
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/readiness",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = GetReadinessResponse)
    )
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<GetReadinessResponse>, ApiError> {
    let database = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetReadinessResponse { database }))
}
