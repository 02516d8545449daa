use crate::domain::{
    ai::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrient::{
        entities::Nutrient,
        ports::{NutrientRepository, NutrientService},
    },
    recipe::ports::{RecipeRepository, RecipeVersionRepository},
};

impl<R, V, I, N, H, L> NutrientService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn list_nutrients(&self) -> Result<Vec<Nutrient>, CoreError> {
        self.nutrient_repository.fetch_catalog().await
    }
}
