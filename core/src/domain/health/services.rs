use crate::domain::{
    ai::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    nutrient::ports::NutrientRepository,
    recipe::ports::{RecipeRepository, RecipeVersionRepository},
};

impl<R, V, I, N, H, L> HealthCheckService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
