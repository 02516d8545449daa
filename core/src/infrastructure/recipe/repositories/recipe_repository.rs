use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::entities::Ingredient,
        recipe::{
            entities::{Recipe, RecipeIngredient},
            ports::RecipeRepository,
            value_objects::{ListRecipesInput, SetRecipeIngredientInput},
        },
    },
    entity::{
        ingredients::Entity as IngredientEntity,
        recipe_ingredients::{
            ActiveModel as RowActiveModel, Column as RowColumn, Entity as RowEntity,
        },
        recipes::{ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity},
    },
};

const DEFAULT_LIST_LIMIT: u64 = 50;

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(recipe: &Recipe) -> RecipeActiveModel {
    RecipeActiveModel {
        id: Set(recipe.id),
        name: Set(recipe.name.clone()),
        description: Set(recipe.description.clone()),
        serving_size: Set(recipe.serving_size),
        serving_unit: Set(recipe.serving_unit.clone()),
        servings_per_pack: Set(recipe.servings_per_pack),
        brand_name: Set(recipe.brand_name.clone()),
        manufacturer: Set(recipe.manufacturer.clone()),
        fssai_license: Set(recipe.fssai_license.clone()),
        allergen_info: Set(recipe.allergen_info.clone()),
        owner: Set(recipe.owner),
        created_at: Set(recipe.created_at.fixed_offset()),
        updated_at: Set(recipe.updated_at.fixed_offset()),
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = RecipeEntity::insert(to_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map(Recipe::from)
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn list(&self, input: ListRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .order_by_desc(RecipeColumn::CreatedAt)
            .offset(input.offset.unwrap_or(0))
            .limit(input.limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let updated = RecipeEntity::update(to_active_model(&recipe))
            .exec(&self.db)
            .await
            .map(Recipe::from)
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn delete(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        RecipeEntity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn get_ingredients(&self, recipe_id: Uuid) -> Result<Vec<RecipeIngredient>, CoreError> {
        let rows = RowEntity::find()
            .filter(RowColumn::RecipeId.eq(recipe_id))
            .find_also_related(IngredientEntity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, ingredient)| {
                ingredient.map(|ing| RecipeIngredient {
                    recipe_id: row.recipe_id,
                    ingredient: Ingredient::from(ing),
                    weight_grams: row.weight_grams,
                })
            })
            .collect())
    }

    async fn set_ingredient(&self, input: SetRecipeIngredientInput) -> Result<(), CoreError> {
        RowEntity::insert(RowActiveModel {
            recipe_id: Set(input.recipe_id),
            ingredient_id: Set(input.ingredient_id),
            weight_grams: Set(input.weight_grams),
        })
        .on_conflict(
            OnConflict::columns([RowColumn::RecipeId, RowColumn::IngredientId])
                .update_column(RowColumn::WeightGrams)
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to set recipe ingredient: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn remove_ingredient(&self, recipe_id: Uuid, ingredient_id: Uuid) -> Result<(), CoreError> {
        RowEntity::delete_many()
            .filter(RowColumn::RecipeId.eq(recipe_id))
            .filter(RowColumn::IngredientId.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove recipe ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
