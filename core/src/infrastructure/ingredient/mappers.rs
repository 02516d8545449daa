use crate::{
    domain::ingredient::entities::{Ingredient, IngredientNutrient},
    entity::{ingredient_nutrients, ingredients},
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            aliases: model.aliases.clone(),
            description: model.description.clone(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}

impl From<ingredient_nutrients::Model> for IngredientNutrient {
    fn from(model: ingredient_nutrients::Model) -> Self {
        Self {
            ingredient_id: model.ingredient_id,
            nutrient_id: model.nutrient_id,
            value_per_100g: model.value_per_100g,
        }
    }
}
