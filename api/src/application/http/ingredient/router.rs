use super::handlers::{
    get_ingredient::{__path_get_ingredient, get_ingredient},
    match_ingredient::{__path_match_ingredient, match_ingredient},
    search_ingredients::{__path_search_ingredients, search_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_ingredients, get_ingredient, match_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root}/ingredients"), get(search_ingredients))
        .route(&format!("{root}/ingredients/match"), post(match_ingredient))
        .route(
            &format!("{root}/ingredients/{{ingredient_id}}"),
            get(get_ingredient),
        )
}
