use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Ingredient, IngredientNutrient},
        value_objects::{IngredientMatch, SearchIngredientsInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn search(
        &self,
        input: SearchIngredientsInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn list_all(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Nutrient density facts for a set of ingredients, one row per
    /// (ingredient, nutrient) pair.
    fn get_facts_for_ingredients(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<IngredientNutrient>, CoreError>> + Send;
}

pub trait IngredientService: Send + Sync {
    fn get_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Black-box name matcher: best database candidate with a confidence
    /// score, or `None` when nothing plausible exists.
    fn match_ingredient(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<IngredientMatch>, CoreError>> + Send;
}
