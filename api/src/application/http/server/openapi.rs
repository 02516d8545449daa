use utoipa::OpenApi;

use crate::application::http::{
    health::router::HealthApiDoc, ingredient::router::IngredientApiDoc,
    nutrient::router::NutrientApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Nutrilabel API",
    description = "Nutrition label generation and FSSAI compliance",
))]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(RecipeApiDoc::openapi());
        doc.merge(IngredientApiDoc::openapi());
        doc.merge(NutrientApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
