use crate::{
    domain::recipe::entities::{Recipe, RecipeVersion},
    entity::{recipe_versions, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            serving_size: model.serving_size,
            serving_unit: model.serving_unit.clone(),
            servings_per_pack: model.servings_per_pack,
            brand_name: model.brand_name.clone(),
            manufacturer: model.manufacturer.clone(),
            fssai_license: model.fssai_license.clone(),
            allergen_info: model.allergen_info.clone(),
            owner: model.owner,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&recipe_versions::Model> for RecipeVersion {
    fn from(model: &recipe_versions::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            version_number: model.version_number,
            snapshot: model.snapshot.clone(),
            is_compliant: model.is_compliant,
            change_summary: model.change_summary.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipe_versions::Model> for RecipeVersion {
    fn from(model: recipe_versions::Model) -> Self {
        Self::from(&model)
    }
}
