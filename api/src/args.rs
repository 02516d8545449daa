use clap::Parser;
use nutrilabel_core::domain::common::{DatabaseConfig, LlmConfig, NutrilabelConfig};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "nutrilabel-api",
    version,
    about = "Nutrition label generation and FSSAI compliance API"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "nutrilabel")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "mistral-api-key", env = "MISTRAL_API_KEY", default_value = "")]
    pub mistral_api_key: String,

    #[arg(
        long = "mistral-model",
        env = "MISTRAL_MODEL",
        default_value = "mistral-small-latest"
    )]
    pub mistral_model: String,
}

impl Args {
    pub fn to_config(&self) -> NutrilabelConfig {
        NutrilabelConfig {
            database: DatabaseConfig {
                host: self.db.host.clone(),
                port: self.db.port,
                username: self.db.username.clone(),
                password: self.db.password.clone(),
                name: self.db.name.clone(),
            },
            llm: LlmConfig {
                mistral_api_key: self.llm.mistral_api_key.clone(),
                mistral_model: self.llm.mistral_model.clone(),
            },
        }
    }
}
