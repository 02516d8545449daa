use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrient::{entities::Nutrient, ports::NutrientRepository},
    },
    entity::{nutrient_categories::Entity as CategoryEntity, nutrients::Entity as NutrientEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresNutrientRepository {
    pub db: DatabaseConnection,
}

impl PostgresNutrientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl NutrientRepository for PostgresNutrientRepository {
    async fn fetch_catalog(&self) -> Result<Vec<Nutrient>, CoreError> {
        let rows = NutrientEntity::find()
            .find_also_related(CategoryEntity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch nutrient catalog: {}", e);
                CoreError::InternalServerError
            })?;

        let mut catalog: Vec<Nutrient> = rows
            .into_iter()
            .filter_map(|(nutrient, category)| category.map(|c| Nutrient::from((nutrient, c))))
            .collect();

        catalog.sort_by_key(|n| (n.category.display_order, n.display_order));

        Ok(catalog)
    }
}
