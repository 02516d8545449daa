use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, nutrient::entities::Nutrient};

#[cfg_attr(test, mockall::automock)]
pub trait NutrientRepository: Send + Sync {
    /// Full reference catalog, ordered by category display order then
    /// nutrient display order.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Nutrient>, CoreError>> + Send;
}

pub trait NutrientService: Send + Sync {
    fn list_nutrients(&self) -> impl Future<Output = Result<Vec<Nutrient>, CoreError>> + Send;
}
