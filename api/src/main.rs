use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nutrilabel_core::application::create_service;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    application::http::server::{app_state::AppState, http_server::serve},
    args::Args,
};

mod application;
mod args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let service = create_service(&args.to_config())
        .await
        .context("failed to initialize service")?;

    let state = AppState::new(Arc::new(args), service);
    serve(state).await
}
