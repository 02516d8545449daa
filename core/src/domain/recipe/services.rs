use uuid::Uuid;

use crate::domain::{
    ai::ports::LlmClient,
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrient::ports::NutrientRepository,
    recipe::{
        entities::{Recipe, RecipeIngredient, RecipeVersion, SERVING_UNITS},
        ports::{RecipeRepository, RecipeService, RecipeVersionRepository},
        value_objects::{
            CreateRecipeInput, ListRecipesInput, SetRecipeIngredientInput, UpdateRecipeInput,
        },
    },
};

impl<R, V, I, N, H, L> RecipeService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<Recipe, CoreError> {
        if !SERVING_UNITS.contains(&input.serving_unit.as_str()) {
            return Err(CoreError::Invalid(format!(
                "serving_unit must be one of {:?}",
                SERVING_UNITS
            )));
        }

        let recipe = Recipe::new(
            input.name,
            input.description,
            input.serving_size,
            input.serving_unit,
            input.servings_per_pack,
            input.brand_name,
            input.manufacturer,
            input.fssai_license,
            input.allergen_info,
            input.owner,
        );

        self.recipe_repository.create(recipe).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_recipes(&self, input: ListRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.list(input).await
    }

    async fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self.get_recipe(recipe_id).await?;

        if let Some(unit) = &input.serving_unit {
            if !SERVING_UNITS.contains(&unit.as_str()) {
                return Err(CoreError::Invalid(format!(
                    "serving_unit must be one of {:?}",
                    SERVING_UNITS
                )));
            }
        }

        if let Some(name) = input.name {
            recipe.name = name;
        }
        if let Some(description) = input.description {
            recipe.description = description;
        }
        if let Some(serving_size) = input.serving_size {
            recipe.serving_size = serving_size;
        }
        if let Some(serving_unit) = input.serving_unit {
            recipe.serving_unit = serving_unit;
        }
        if let Some(servings_per_pack) = input.servings_per_pack {
            recipe.servings_per_pack = servings_per_pack;
        }
        if let Some(brand_name) = input.brand_name {
            recipe.brand_name = brand_name;
        }
        if let Some(manufacturer) = input.manufacturer {
            recipe.manufacturer = manufacturer;
        }
        if let Some(fssai_license) = input.fssai_license {
            recipe.fssai_license = fssai_license;
        }
        if let Some(allergen_info) = input.allergen_info {
            recipe.allergen_info = allergen_info;
        }

        let (now, _) = generate_timestamp();
        recipe.updated_at = now;

        self.recipe_repository.update(recipe).await
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        // Ensure the recipe exists so a delete of an unknown id reports
        // NotFound instead of succeeding silently.
        self.get_recipe(recipe_id).await?;
        self.recipe_repository.delete(recipe_id).await
    }

    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredient>, CoreError> {
        self.get_recipe(recipe_id).await?;
        self.recipe_repository.get_ingredients(recipe_id).await
    }

    async fn set_recipe_ingredient(
        &self,
        input: SetRecipeIngredientInput,
    ) -> Result<(), CoreError> {
        if input.weight_grams <= 0.0 {
            return Err(CoreError::Invalid(
                "weight_grams must be positive".to_string(),
            ));
        }

        self.get_recipe(input.recipe_id).await?;
        self.ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.recipe_repository.set_ingredient(input).await
    }

    async fn remove_recipe_ingredient(
        &self,
        recipe_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<(), CoreError> {
        self.get_recipe(recipe_id).await?;
        self.recipe_repository
            .remove_ingredient(recipe_id, ingredient_id)
            .await
    }

    async fn get_recipe_versions(
        &self,
        recipe_id: Uuid,
        limit: u64,
    ) -> Result<Vec<RecipeVersion>, CoreError> {
        self.get_recipe(recipe_id).await?;
        self.version_repository.list(recipe_id, limit).await
    }
}
