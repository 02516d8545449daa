use axum::extract::State;
use nutrilabel_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetHealthResponse {
    pub latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = GetHealthResponse)
    )
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<GetHealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetHealthResponse { latency_ms }))
}
