use super::handlers::{
    get_health::{__path_get_health, get_health},
    get_readiness::{__path_get_readiness, get_readiness},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_health, get_readiness))]
pub struct HealthApiDoc;

pub fn health_routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(get_health))
        .route("/readiness", get(get_readiness))
}
