use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::RecipeVersion, ports::RecipeVersionRepository},
    },
    entity::recipe_versions::{
        ActiveModel as VersionActiveModel, Column as VersionColumn, Entity as VersionEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeVersionRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeVersionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeVersionRepository for PostgresRecipeVersionRepository {
    async fn create(&self, version: RecipeVersion) -> Result<RecipeVersion, CoreError> {
        let created = VersionEntity::insert(VersionActiveModel {
            id: Set(version.id),
            recipe_id: Set(version.recipe_id),
            version_number: Set(version.version_number),
            snapshot: Set(version.snapshot),
            is_compliant: Set(version.is_compliant),
            change_summary: Set(version.change_summary),
            created_at: Set(version.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(RecipeVersion::from)
        .map_err(|e| {
            error!("Failed to create recipe version: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn latest_version_number(&self, recipe_id: Uuid) -> Result<Option<i32>, CoreError> {
        let latest = VersionEntity::find()
            .filter(VersionColumn::RecipeId.eq(recipe_id))
            .order_by_desc(VersionColumn::VersionNumber)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get latest recipe version: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(latest.map(|v| v.version_number))
    }

    async fn list(&self, recipe_id: Uuid, limit: u64) -> Result<Vec<RecipeVersion>, CoreError> {
        let versions = VersionEntity::find()
            .filter(VersionColumn::RecipeId.eq(recipe_id))
            .order_by_desc(VersionColumn::VersionNumber)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipe versions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(versions.into_iter().map(RecipeVersion::from).collect())
    }
}
