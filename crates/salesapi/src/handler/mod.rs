mod customer;
mod product;
mod sale;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::customer::customer_routes;
pub use self::product::product_routes;
pub use self::sale::sale_routes;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,

        sale::get_sales,
        sale::get_sale,
        sale::create_sale,
        sale::update_sale,
        sale::delete_sale,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Sale", description = "Sale endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

/// Outer-surface settings that do not belong to any service.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Restricts CORS to one origin. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
    /// Prebuilt dashboard bundle served for every unmatched path.
    pub static_dir: Option<PathBuf>,
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState, options: &RouterOptions) -> Result<Router> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(sale_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        let mut app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        if let Some(dir) = &options.static_dir {
            info!("📁 Serving static files from {}", dir.display());
            let index = ServeFile::new(dir.join("index.html"));
            app = app.fallback_service(ServeDir::new(dir).fallback(index));
        }

        let cors = match &options.cors_allowed_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid CORS origin: {origin}"))?,
                )
                .allow_methods(Any)
                .allow_headers(Any),
            None => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        };

        Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
    }

    pub async fn serve(port: u16, app: Router) -> Result<()> {
        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
