use crate::domain::{
    ai::ports::LlmClient,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrient::ports::NutrientRepository,
    recipe::ports::{RecipeRepository, RecipeVersionRepository},
};

/// Aggregate holding every port implementation. All domain service traits
/// are implemented on this single struct so callers wire it once.
#[derive(Debug, Clone)]
pub struct Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    pub(crate) recipe_repository: R,
    pub(crate) version_repository: V,
    pub(crate) ingredient_repository: I,
    pub(crate) nutrient_repository: N,
    pub(crate) health_check_repository: H,
    pub(crate) llm_client: L,
}

impl<R, V, I, N, H, L> Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    pub fn new(
        recipe_repository: R,
        version_repository: V,
        ingredient_repository: I,
        nutrient_repository: N,
        health_check_repository: H,
        llm_client: L,
    ) -> Self {
        Self {
            recipe_repository,
            version_repository,
            ingredient_repository,
            nutrient_repository,
            health_check_repository,
            llm_client,
        }
    }
}
