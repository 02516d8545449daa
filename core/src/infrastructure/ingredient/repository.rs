use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{
            entities::{Ingredient, IngredientNutrient},
            ports::IngredientRepository,
            value_objects::SearchIngredientsInput,
        },
    },
    entity::{
        ingredient_nutrients::{
            Column as FactColumn, Entity as FactEntity,
        },
        ingredients::{Column as IngredientColumn, Entity as IngredientEntity},
    },
};

const DEFAULT_SEARCH_LIMIT: u64 = 20;

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn search(&self, input: SearchIngredientsInput) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .filter(
                IngredientColumn::Name
                    .contains(&input.query)
                    .or(IngredientColumn::Aliases.contains(&input.query)),
            )
            .order_by_asc(IngredientColumn::Name)
            .limit(input.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients.into_iter().map(Ingredient::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .order_by_asc(IngredientColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients.into_iter().map(Ingredient::from).collect())
    }

    async fn get_facts_for_ingredients(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> Result<Vec<IngredientNutrient>, CoreError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let facts = FactEntity::find()
            .filter(FactColumn::IngredientId.is_in(ingredient_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredient nutrient facts: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(facts.into_iter().map(IngredientNutrient::from).collect())
    }
}
