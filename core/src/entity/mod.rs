pub mod ingredient_nutrients;
pub mod ingredients;
pub mod nutrient_categories;
pub mod nutrients;
pub mod recipe_ingredients;
pub mod recipe_versions;
pub mod recipes;
