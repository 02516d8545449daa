use super::handlers::get_nutrients::{__path_get_nutrients, get_nutrients};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_nutrients))]
pub struct NutrientApiDoc;

pub fn nutrient_routes(state: AppState) -> Router<AppState> {
    let root = &state.args.server.root_path;

    Router::new().route(&format!("{root}/nutrients"), get(get_nutrients))
}
