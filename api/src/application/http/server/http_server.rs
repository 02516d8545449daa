use axum::{Router, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    health::router::health_routes,
    ingredient::router::ingredient_routes,
    nutrient::router::nutrient_routes,
    recipe::router::recipe_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};

pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = Router::new()
        .merge(recipe_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(nutrient_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::build()))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let addr = format!("{}:{}", state.args.server.host, state.args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
