use crate::{
    domain::nutrient::entities::{Nutrient, NutrientCategory},
    entity::{nutrient_categories, nutrients},
};

impl From<&nutrient_categories::Model> for NutrientCategory {
    fn from(model: &nutrient_categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            display_order: model.display_order,
        }
    }
}

impl From<(nutrients::Model, nutrient_categories::Model)> for Nutrient {
    fn from((nutrient, category): (nutrients::Model, nutrient_categories::Model)) -> Self {
        Self {
            id: nutrient.id,
            name: nutrient.name,
            unit: nutrient.unit,
            category: NutrientCategory::from(&category),
            daily_value: nutrient.daily_value,
            display_order: nutrient.display_order,
            is_mandatory: nutrient.is_mandatory,
        }
    }
}
