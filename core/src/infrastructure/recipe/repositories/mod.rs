pub mod recipe_repository;
pub mod recipe_version_repository;

pub use recipe_repository::PostgresRecipeRepository;
pub use recipe_version_repository::PostgresRecipeVersionRepository;
