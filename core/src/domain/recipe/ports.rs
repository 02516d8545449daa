use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeIngredient, RecipeVersion},
        value_objects::{
            CreateRecipeInput, ListRecipesInput, SetRecipeIngredientInput, UpdateRecipeInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn list(
        &self,
        input: ListRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Current weighted ingredient rows with their master ingredients.
    fn get_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeIngredient>, CoreError>> + Send;

    /// Insert the row or, when the recipe already lists the ingredient,
    /// replace its weight. Never duplicates an (recipe, ingredient) pair.
    fn set_ingredient(
        &self,
        input: SetRecipeIngredientInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_ingredient(
        &self,
        recipe_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeVersionRepository: Send + Sync {
    fn create(
        &self,
        version: RecipeVersion,
    ) -> impl Future<Output = Result<RecipeVersion, CoreError>> + Send;

    fn latest_version_number(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<i32>, CoreError>> + Send;

    fn list(
        &self,
        recipe_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecipeVersion>, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        input: ListRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeIngredient>, CoreError>> + Send;

    fn set_recipe_ingredient(
        &self,
        input: SetRecipeIngredientInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_recipe_ingredient(
        &self,
        recipe_id: Uuid,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Version history, most recent first.
    fn get_recipe_versions(
        &self,
        recipe_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecipeVersion>, CoreError>> + Send;
}
