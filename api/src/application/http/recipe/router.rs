use super::handlers::{
    analyze_recipe::{__path_analyze_recipe, analyze_recipe},
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipe_versions::{__path_get_recipe_versions, get_recipe_versions},
    get_recipes::{__path_get_recipes, get_recipes},
    parse_recipe_text::{__path_parse_recipe_text, parse_recipe_text},
    reformulate_recipe::{__path_reformulate_recipe, reformulate_recipe},
    remove_recipe_ingredient::{__path_remove_recipe_ingredient, remove_recipe_ingredient},
    set_recipe_ingredient::{__path_set_recipe_ingredient, set_recipe_ingredient},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    get_recipes,
    get_recipe,
    update_recipe,
    delete_recipe,
    set_recipe_ingredient,
    remove_recipe_ingredient,
    analyze_recipe,
    reformulate_recipe,
    get_recipe_versions,
    parse_recipe_text
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root}/recipes"),
            post(create_recipe).get(get_recipes),
        )
        .route(&format!("{root}/recipes/parse"), post(parse_recipe_text))
        .route(
            &format!("{root}/recipes/{{recipe_id}}"),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{root}/recipes/{{recipe_id}}/ingredients"),
            put(set_recipe_ingredient),
        )
        .route(
            &format!("{root}/recipes/{{recipe_id}}/ingredients/{{ingredient_id}}"),
            delete(remove_recipe_ingredient),
        )
        .route(
            &format!("{root}/recipes/{{recipe_id}}/analyze"),
            post(analyze_recipe),
        )
        .route(
            &format!("{root}/recipes/{{recipe_id}}/reformulate"),
            post(reformulate_recipe),
        )
        .route(
            &format!("{root}/recipes/{{recipe_id}}/versions"),
            get(get_recipe_versions),
        )
}
