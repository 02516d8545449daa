use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, CoreError> {
    let url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.username, config.password, config.host, config.port, config.name
    );

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);

    Database::connect(options).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        CoreError::InternalServerError
    })
}

/// Apply the embedded SQL migrations (schema + nutrient catalog seed).
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), CoreError> {
    sqlx::migrate!("./migrations")
        .run(db.get_postgres_connection_pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to run migrations: {}", e);
            CoreError::InternalServerError
        })
}
