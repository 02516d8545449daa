use crate::{
    domain::common::{NutrilabelConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        db,
        health::PostgresHealthCheckRepository,
        ingredient::PostgresIngredientRepository,
        llm::MistralLlmClient,
        nutrient::PostgresNutrientRepository,
        recipe::{PostgresRecipeRepository, PostgresRecipeVersionRepository},
    },
};

/// The fully wired service: Postgres-backed ports plus the Mistral client.
pub type NutrilabelService = Service<
    PostgresRecipeRepository,
    PostgresRecipeVersionRepository,
    PostgresIngredientRepository,
    PostgresNutrientRepository,
    PostgresHealthCheckRepository,
    MistralLlmClient,
>;

/// Connect to the database, run migrations and assemble the service.
pub async fn create_service(config: &NutrilabelConfig) -> Result<NutrilabelService, CoreError> {
    let db = db::connect(&config.database).await?;
    db::run_migrations(&db).await?;

    Ok(Service::new(
        PostgresRecipeRepository::new(db.clone()),
        PostgresRecipeVersionRepository::new(db.clone()),
        PostgresIngredientRepository::new(db.clone()),
        PostgresNutrientRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        MistralLlmClient::new(
            config.llm.mistral_api_key.clone(),
            config.llm.mistral_model.clone(),
        ),
    ))
}
