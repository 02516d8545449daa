use uuid::Uuid;

use crate::domain::{
    ai::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        matcher::match_ingredient,
        ports::{IngredientRepository, IngredientService},
        value_objects::{IngredientMatch, SearchIngredientsInput},
    },
    nutrient::ports::NutrientRepository,
    recipe::ports::{RecipeRepository, RecipeVersionRepository},
};

impl<R, V, I, N, H, L> IngredientService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.search(input).await
    }

    async fn match_ingredient(&self, name: String) -> Result<Option<IngredientMatch>, CoreError> {
        // Matching works over the full master list; it is small and the
        // confidence ladder needs alias access for every candidate.
        let ingredients = self.ingredient_repository.list_all().await?;
        Ok(match_ingredient(&name, &ingredients))
    }
}
